//! Command-line configuration.
//!
//! `tui-snake [WIDTH HEIGHT] [--seed N] [--walls PERCENT] [--scores PATH]`
//!
//! Without `WIDTH HEIGHT` the board is sized from the terminal.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::core::{cell_size, BoardDims};
use crate::types::{AUTO_SIZE_PERCENT, DEFAULT_COLUMNS, DEFAULT_ROWS, SCORE_FILE, WALL_PERCENT};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-snake", version, about = "Snake in the terminal")]
pub struct Cli {
    /// Board width in cells
    #[arg(value_name = "WIDTH", value_parser = parse_dimension, requires = "height")]
    pub width: Option<usize>,

    /// Board height in cells
    #[arg(value_name = "HEIGHT", value_parser = parse_dimension)]
    pub height: Option<usize>,

    /// Map seed; the same seed always produces the same board
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall budget as a percentage of all cells
    #[arg(long, default_value_t = WALL_PERCENT, value_parser = parse_percent)]
    pub walls: usize,

    /// High-score file
    #[arg(long, default_value = SCORE_FILE)]
    pub scores: PathBuf,
}

/// Parse a board dimension: a non-empty run of ASCII digits, at least 1.
///
/// Signs, separators and whitespace are rejected, unlike `str::parse`.
pub fn parse_dimension(arg: &str) -> std::result::Result<usize, String> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "`{}` (expected a contiguous collection of digits between 0-9)",
            arg.escape_debug()
        ));
    }

    let value = arg
        .bytes()
        .try_fold(0usize, |acc, b| {
            acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
        })
        .ok_or_else(|| {
            format!(
                "`{arg}` is too large (value should not exceed `{}`)",
                usize::MAX
            )
        })?;

    if value == 0 {
        return Err("the board needs at least one cell in each direction".to_string());
    }
    Ok(value)
}

fn parse_percent(arg: &str) -> std::result::Result<usize, String> {
    let value: usize = arg
        .parse()
        .map_err(|_| format!("`{}` is not a percentage", arg.escape_debug()))?;
    if value > 100 {
        return Err(format!("{value} is more than 100 percent"));
    }
    Ok(value)
}

/// Resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dims: BoardDims,
    pub seed: Option<u64>,
    pub wall_percent: usize,
    pub score_path: PathBuf,
}

impl GameConfig {
    /// Combine parsed arguments with the terminal size (in glyphs), if known.
    pub fn resolve(cli: Cli, terminal_size: Option<(u16, u16)>) -> Result<Self> {
        let (columns, rows) = match (cli.width, cli.height) {
            (Some(w), Some(h)) => (w, h),
            _ => auto_size(terminal_size),
        };
        let dims = BoardDims::new(columns, rows)
            .ok_or_else(|| anyhow!("a {columns}x{rows} board is too large"))?;

        Ok(Self {
            dims,
            seed: cli.seed,
            wall_percent: cli.walls,
            score_path: cli.scores,
        })
    }
}

/// Cells that fit in `AUTO_SIZE_PERCENT` of the terminal, or the defaults.
pub fn auto_size(terminal_size: Option<(u16, u16)>) -> (usize, usize) {
    let s = cell_size();
    let fit = |glyphs: u16| usize::from(glyphs) * AUTO_SIZE_PERCENT / 100 / s;

    let (columns, rows) = terminal_size.map_or((0, 0), |(w, h)| (fit(w), fit(h)));
    (
        if columns == 0 { DEFAULT_COLUMNS } else { columns },
        if rows == 0 { DEFAULT_ROWS } else { rows },
    )
}
