use crate::coords::{Point, Rect};
use crate::paint::ShapeStyle;
use crate::scene::DrawList;

/// Rectangle given by two opposite corners.
///
/// Corners are kept exactly as drawn (or read); top-left, bottom-right and the
/// dimensions are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleCommand {
    pub p1: Point,
    pub p2: Point,
    pub style: ShapeStyle,
}

impl RectangleCommand {
    #[inline]
    pub fn new(p1: Point, p2: Point, style: ShapeStyle) -> Self {
        Self { p1, p2, style }
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.p1.min(self.p2)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.p1.max(self.p2)
    }

    /// `(width, height)` of the normalized rectangle.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        let tl = self.top_left();
        let br = self.bottom_right();
        (br.x - tl.x, br.y - tl.y)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.p1, self.p2)
    }

    pub(crate) fn record(&self, list: &mut DrawList) {
        list.push_rect(self.bounds(), self.style.color, self.style.filled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn derived_geometry_ignores_corner_order() {
        let r = RectangleCommand::new(
            Point::new(30, 5),
            Point::new(10, 25),
            ShapeStyle::outlined(Color::BLACK),
        );
        assert_eq!(r.top_left(), Point::new(10, 5));
        assert_eq!(r.bottom_right(), Point::new(30, 25));
        assert_eq!(r.dimensions(), (20, 20));
        // Corners are not normalized in storage.
        assert_eq!(r.p1, Point::new(30, 5));
    }
}
