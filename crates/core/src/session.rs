//! Session - the single owner of all game state
//!
//! Created once at startup (dimensions, RNG, generated map, high score) and
//! torn down once at shutdown. Only the render loop mutates it.

use tracing::{debug, info};

use crate::geometry::{BoardDims, Coord};
use crate::map::{BoardMap, MapGenerator};
use crate::objects::{Actor, Fruit, Wall};
use crate::rng::RandomEngine;
use crate::types::Command;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    map: BoardMap,
    fruits: Vec<Fruit>,
    actor: Actor,
    score: u64,
    high_score: u64,
}

impl Session {
    /// Generate a map with `generator` and spawn the actor on a free cell.
    pub fn new(dims: BoardDims, mut rng: RandomEngine, generator: &MapGenerator) -> Self {
        let map = generator.generate(dims, &mut rng);
        let actor = Actor::new(spawn_point(&map));
        info!(
            columns = dims.columns,
            rows = dims.rows,
            walls = map.walls().len(),
            "session started"
        );
        Self {
            map,
            fruits: Vec::new(),
            actor,
            score: 0,
            high_score: 0,
        }
    }

    /// Set the high score loaded from the ledger.
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    /// Board size in cells.
    pub fn dims(&self) -> BoardDims {
        self.map.dims()
    }

    /// The generated map (walls and floor).
    pub fn map(&self) -> &BoardMap {
        &self.map
    }

    /// Walls in placement order.
    pub fn walls(&self) -> &[Wall] {
        self.map.walls()
    }

    /// Decorated interior glyphs, row-major.
    pub fn floor(&self) -> &[u8] {
        self.map.floor()
    }

    /// Fruit currently on the board.
    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    /// Place a fruit. Nothing in the session calls this on its own.
    pub fn add_fruit(&mut self, fruit: Fruit) {
        debug_assert!(self.dims().contains(fruit.coord));
        self.fruits.push(fruit);
    }

    /// The player's snake.
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Mutable access for movement steps driven from outside the session.
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    /// Score of the running game. Nothing advances it yet.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best score from previous games.
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Dispatch one normalized command.
    pub fn handle_command(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => Flow::Quit,
            Command::Up | Command::Left | Command::Down | Command::Right => {
                self.actor.apply_command(command);
                Flow::Continue
            }
            Command::Other(code) => {
                debug!(%code, "ignored command");
                Flow::Continue
            }
        }
    }
}

/// First wall-free cell, scanning in coordinate order from the board centre.
fn spawn_point(map: &BoardMap) -> Coord {
    let dims = map.dims();
    let total = dims.total_cells();
    let centre = dims.coord(dims.rows / 2, dims.columns / 2).index();

    (0..total)
        .map(|offset| Coord::from_index((centre + offset) % total))
        .find(|c| !map.is_wall(*c))
        .unwrap_or_else(|| Coord::from_index(centre))
}
