use crate::coords::Point;
use crate::paint::ShapeStyle;
use crate::scene::DrawList;

/// Freehand polyline. Point order is stroke order.
///
/// No minimum length: an empty or single-point squiggle is valid and simply
/// draws nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquiggleCommand {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

impl SquiggleCommand {
    #[inline]
    pub fn new(style: ShapeStyle) -> Self {
        Self { points: Vec::new(), style }
    }

    #[inline]
    pub fn with_points(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self { points, style }
    }

    /// Appends a point to the end of the stroke.
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Records one stroked segment per consecutive pair of points.
    ///
    /// The fill flag does not apply to open polylines.
    pub(crate) fn record(&self, list: &mut DrawList) {
        for pair in self.points.windows(2) {
            list.push_line(pair[0], pair[1], self.style.color);
        }
    }
}
