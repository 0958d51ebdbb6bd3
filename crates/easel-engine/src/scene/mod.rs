//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic drawing primitives produced by shape commands
//! - preserve paint order (insertion order, back-to-front)

mod cmd;
mod list;

pub use cmd::{DrawCmd, PaintMode};
pub use list::DrawList;
