//! Terminal rendering layer.
//!
//! The whole board is one flat text buffer: borders, line breaks and the
//! decorated floor are formatted once, then the compositor stamps assets into
//! it every frame and the renderer writes it out in a single call.
//!
//! - [`fb`]: buffer layout, exact capacity and glyph offsets
//! - [`compositor`]: static/dynamic asset stamping with an optional render hook
//! - [`renderer`]: terminal setup/teardown and frame output

pub mod compositor;
pub mod fb;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use compositor::{Compositor, RenderHook};
pub use fb::FrameBuffer;
pub use renderer::{encode_frame_into, restore_terminal, TerminalRenderer};
