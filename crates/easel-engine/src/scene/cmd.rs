use crate::coords::{Point, Rect};
use crate::paint::Color;

/// Whether a closed primitive is filled or only outlined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaintMode {
    Fill,
    Stroke,
}

impl PaintMode {
    #[inline]
    pub fn from_filled(filled: bool) -> Self {
        if filled { PaintMode::Fill } else { PaintMode::Stroke }
    }
}

/// Renderer-agnostic drawing primitive.
///
/// Shape commands project onto these; a renderer only has to know how to
/// draw ovals, rectangles and line segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    /// Ellipse inscribed in `bounds`.
    Oval { bounds: Rect, color: Color, mode: PaintMode },
    Rect { bounds: Rect, color: Color, mode: PaintMode },
    /// Stroked segment from `from` to `to`.
    Line { from: Point, to: Point, color: Color },
}
