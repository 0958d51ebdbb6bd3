//! Coordinate and geometry types shared by shapes and renderers.
//!
//! Canonical canvas space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Shape geometry is stored as non-negative [`Point`]s. Derived drawing
//! geometry ([`Rect`]) is signed, since a circle near the origin can extend
//! past it.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
