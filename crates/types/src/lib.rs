//! Shared types and constants
//!
//! Pure data with no external dependencies, usable by the core simulation, the
//! terminal layer and the input mapping alike.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 32 | Board width in cells when the size is not given or detected |
//! | `DEFAULT_ROWS` | 8 | Board height in cells when the size is not given or detected |
//! | `WALL_PERCENT` | 10 | Wall budget as a percentage of all cells |
//! | `DECORATION_PERCENT` | 5 | Chance (percent) that a floor glyph is decorated |
//! | `AUTO_SIZE_PERCENT` | 70 | Share of the terminal used when sizing automatically |
//!
//! # Loop Timing
//!
//! - `TICK_MS`: 100ms between frames when no input arrives
//! - `MAX_EVENTS_PER_FRAME`: upper bound on key events drained per frame
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Command, ObjectKind};
//!
//! assert_eq!(Command::from_code('W'), Command::Up);
//! assert_eq!(Command::Up.code(), 'W');
//! assert!(ObjectKind::FruitBonus.is_fruit());
//! ```

/// Program title, used for the terminal title and message prefixes.
pub const TITLE: &str = "Snake";

/// Board width in cells used when no size is available.
pub const DEFAULT_COLUMNS: usize = 32;

/// Board height in cells used when no size is available.
pub const DEFAULT_ROWS: usize = 8;

/// Wall budget as a percentage of the total cell count.
pub const WALL_PERCENT: usize = 10;

/// Floor decoration probability as a percentage of the total cell count.
pub const DECORATION_PERCENT: usize = 5;

/// Share of the terminal (percent) the board may use when sized automatically.
pub const AUTO_SIZE_PERCENT: usize = 70;

/// Frame interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Maximum number of key events consumed per frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Default score file, relative to the working directory.
pub const SCORE_FILE: &str = "scores.txt";

/// Semantic tag attached to every glyph the compositor writes.
///
/// Styling layers use it to pick colors without the compositor knowing about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Fruit,
    FruitBonus,
    FruitInvincible,
    ActorHead,
    ActorBody,
    ActorTail,
    Wall,
}

impl ObjectKind {
    pub fn is_fruit(&self) -> bool {
        matches!(
            self,
            ObjectKind::Fruit | ObjectKind::FruitBonus | ObjectKind::FruitInvincible
        )
    }

    pub fn is_actor(&self) -> bool {
        matches!(
            self,
            ObjectKind::ActorHead | ObjectKind::ActorBody | ObjectKind::ActorTail
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Fruit => "fruit",
            ObjectKind::FruitBonus => "fruit-bonus",
            ObjectKind::FruitInvincible => "fruit-invincible",
            ObjectKind::ActorHead => "actor-head",
            ObjectKind::ActorBody => "actor-body",
            ObjectKind::ActorTail => "actor-tail",
            ObjectKind::Wall => "wall",
        }
    }
}

/// Fruit variants
///
/// Declared so they can be drawn; the session never spawns them on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FruitKind {
    #[default]
    Plain,
    Bonus,
    Invincible,
}

impl FruitKind {
    pub fn object_kind(&self) -> ObjectKind {
        match self {
            FruitKind::Plain => ObjectKind::Fruit,
            FruitKind::Bonus => ObjectKind::FruitBonus,
            FruitKind::Invincible => ObjectKind::FruitInvincible,
        }
    }
}

/// Normalized single-character commands delivered by the input layer.
///
/// Direction letters follow the WASD layout; every other key passes through
/// uppercased as [`Command::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Left,
    Down,
    Right,
    Quit,
    Other(char),
}

impl Command {
    /// Decode an (already uppercased) command code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Command;
    ///
    /// assert_eq!(Command::from_code('A'), Command::Left);
    /// assert_eq!(Command::from_code('Q'), Command::Quit);
    /// assert_eq!(Command::from_code('I'), Command::Other('I'));
    /// ```
    pub fn from_code(code: char) -> Self {
        match code {
            'W' => Command::Up,
            'A' => Command::Left,
            'S' => Command::Down,
            'D' => Command::Right,
            'Q' => Command::Quit,
            other => Command::Other(other),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Command::Up => 'W',
            Command::Left => 'A',
            Command::Down => 'S',
            Command::Right => 'D',
            Command::Quit => 'Q',
            Command::Other(c) => *c,
        }
    }

    pub fn is_direction(&self) -> bool {
        matches!(
            self,
            Command::Up | Command::Left | Command::Down | Command::Right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults() {
        assert_eq!(DEFAULT_COLUMNS, 32);
        assert_eq!(DEFAULT_ROWS, 8);
        assert_eq!(WALL_PERCENT, 10);
        assert_eq!(DECORATION_PERCENT, 5);
        assert_eq!(SCORE_FILE, "scores.txt");
    }

    #[test]
    fn test_command_codes_round_trip_through_known_letters() {
        for code in ['W', 'A', 'S', 'D', 'Q', 'X', '1'] {
            assert_eq!(Command::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_only_wasd_are_directions() {
        assert!(Command::Up.is_direction());
        assert!(Command::Right.is_direction());
        assert!(!Command::Quit.is_direction());
        assert!(!Command::Other('I').is_direction());
    }

    #[test]
    fn test_fruit_variants_map_to_kind_tags() {
        assert_eq!(FruitKind::Plain.object_kind(), ObjectKind::Fruit);
        assert_eq!(FruitKind::Bonus.object_kind(), ObjectKind::FruitBonus);
        assert_eq!(
            FruitKind::Invincible.object_kind(),
            ObjectKind::FruitInvincible
        );
        assert!(ObjectKind::ActorTail.is_actor());
        assert!(!ObjectKind::Wall.is_fruit());
    }
}
