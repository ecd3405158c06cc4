//! Terminal input module.
//!
//! Maps `crossterm` key events to the single-character command codes the game
//! consumes, and batches them per frame.

pub mod batch;
pub mod map;

pub use tui_snake_types as types;

pub use batch::{collect_batch, poll_batch, InputBatch};
pub use map::{handle_key_event, is_interrupt, key_to_code};
