//! Core game logic - pure, deterministic and testable
//!
//! Everything here is independent of the terminal. Given the same seed the
//! generated map, and therefore the formatted frame, is identical.
//!
//! # Module Structure
//!
//! - [`geometry`]: packed coordinates, board dimensions, cell size
//! - [`assets`]: glyph shapes and the fixed border/floor glyphs
//! - [`objects`]: walls, fruit, the actor and its tail
//! - [`rng`]: seeded xorshift generator
//! - [`map`]: wall placement and floor decoration
//! - [`score`]: persisted high-score ledger
//! - [`session`]: the state owner passed to the renderer and input handling
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{BoardDims, MapGenerator, RandomEngine, Session};
//!
//! let dims = BoardDims::new(32, 8).unwrap();
//! let session = Session::new(dims, RandomEngine::with_seed(7), &MapGenerator::default());
//!
//! assert!(session.walls().len() < dims.total_cells());
//! assert!(!session.map().is_wall(session.actor().head()));
//! ```

pub mod assets;
pub mod geometry;
pub mod map;
pub mod objects;
pub mod rng;
pub mod score;
pub mod session;

pub use tui_snake_types as types;

pub use assets::Asset;
pub use geometry::{cell_size, BoardDims, Coord};
pub use map::{BoardMap, MapGenerator};
pub use objects::{Actor, Fruit, Placed, SegmentShape, TailSegment, Wall};
pub use rng::RandomEngine;
pub use score::{parse_scores, LedgerParse, ScoreLedger};
pub use session::{Flow, Session};
