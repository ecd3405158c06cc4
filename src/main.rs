//! Terminal Snake runner (default binary).
//!
//! Sets up the board from the command line, then runs the frame loop:
//! compose, write, collect input for one tick, dispatch commands.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::config::{Cli, GameConfig};
use tui_snake::core::{cell_size, Flow, MapGenerator, RandomEngine, ScoreLedger, Session};
use tui_snake::input::poll_batch;
use tui_snake::signals::ShutdownSignals;
use tui_snake::term::{restore_terminal, Compositor, FrameBuffer, TerminalRenderer};
use tui_snake::types::{DECORATION_PERCENT, TICK_MS, TITLE};

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shutdown {
    Quit,
    Interrupted,
}

impl Shutdown {
    /// Printed after the terminal is restored; the default filter shows `warn`.
    fn message(self) -> &'static str {
        match self {
            Shutdown::Quit => "program terminating",
            Shutdown::Interrupted => "program interrupted",
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors and --help both end here.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    if let Err(e) = run(cli) {
        error!("{e:#}");
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::resolve(cli, crossterm::terminal::size().ok())?;
    info!(
        columns = config.dims.columns,
        rows = config.dims.rows,
        seed = ?config.seed,
        "starting"
    );

    let rng = match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::from_time(),
    };
    let generator = MapGenerator::new(config.wall_percent, DECORATION_PERCENT);

    let high_score = match ScoreLedger::load(&config.score_path) {
        Ok(ledger) => ledger.high_score(),
        Err(e) => {
            warn!("unable to retrieve high score, time for a new record then! ({e:#})");
            0
        }
    };
    let mut fb = FrameBuffer::allocate(config.dims, cell_size())?;
    let mut session = Session::new(config.dims, rng, &generator).with_high_score(high_score);
    fb.format(session.floor());

    let signals = ShutdownSignals::register()?;
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter(TITLE)?;
    let result = frame_loop(&mut term, &mut fb, &mut session, &signals);
    // Always try to restore terminal state.
    let restored = term.exit();

    warn!("{}", result?.message());
    restored
}

fn frame_loop(
    term: &mut TerminalRenderer,
    fb: &mut FrameBuffer,
    session: &mut Session,
    signals: &ShutdownSignals,
) -> Result<Shutdown> {
    let mut compositor = Compositor::new();
    let tick = Duration::from_millis(TICK_MS);

    loop {
        compositor.draw_frame(fb, session, None);
        term.draw(fb)?;

        let batch = poll_batch(tick)?;
        if batch.interrupted || signals.is_raised() {
            return Ok(Shutdown::Interrupted);
        }
        if batch.resized {
            term.invalidate();
        }
        for &command in &batch.commands {
            if session.handle_command(command) == Flow::Quit {
                return Ok(Shutdown::Quit);
            }
        }
    }
}

/// Leave raw mode and the alternate screen before the panic message prints.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_reasons_have_distinct_messages() {
        assert_eq!(Shutdown::Quit.message(), "program terminating");
        assert_eq!(Shutdown::Interrupted.message(), "program interrupted");
    }
}
