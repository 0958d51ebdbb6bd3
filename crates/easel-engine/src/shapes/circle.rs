use crate::coords::{Point, Rect};
use crate::paint::ShapeStyle;
use crate::scene::DrawList;

/// Circle given by its centre and radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleCommand {
    pub centre: Point,
    pub radius: u32,
    pub style: ShapeStyle,
}

impl CircleCommand {
    #[inline]
    pub fn new(centre: Point, radius: u32, style: ShapeStyle) -> Self {
        Self { centre, radius, style }
    }

    /// Bounding square of the circle, `(cx - r, cy - r, 2r, 2r)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.centre, self.radius)
    }

    pub(crate) fn record(&self, list: &mut DrawList) {
        list.push_oval(self.bounds(), self.style.color, self.style.filled);
    }
}
