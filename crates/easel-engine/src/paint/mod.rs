//! Paint style shared between shapes and renderers.
//!
//! Scope:
//! - color representation (8-bit sRGB channels)
//! - fill vs. outline selection
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// How a shape is painted: its color and whether its interior is filled.
///
/// Both fields are mandatory; every shape carries a style from the moment it
/// is created.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShapeStyle {
    pub color: Color,
    pub filled: bool,
}

impl ShapeStyle {
    #[inline]
    pub const fn new(color: Color, filled: bool) -> Self {
        Self { color, filled }
    }

    #[inline]
    pub const fn outlined(color: Color) -> Self {
        Self::new(color, false)
    }

    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::new(color, true)
    }
}
