use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::render::Renderer;

use super::{DrawCmd, PaintMode};

/// Recorded draw stream for a scene.
///
/// Items are painted in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records an oval inscribed in `bounds`.
    #[inline]
    pub fn push_oval(&mut self, bounds: Rect, color: Color, filled: bool) {
        self.push(DrawCmd::Oval { bounds, color, mode: PaintMode::from_filled(filled) });
    }

    /// Records a rectangle.
    #[inline]
    pub fn push_rect(&mut self, bounds: Rect, color: Color, filled: bool) {
        self.push(DrawCmd::Rect { bounds, color, mode: PaintMode::from_filled(filled) });
    }

    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, from: Point, to: Point, color: Color) {
        self.push(DrawCmd::Line { from, to, color });
    }

    /// Feeds every recorded item to `renderer`, in paint order.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for cmd in &self.items {
            renderer.draw(cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::ShapeStyle;
    use crate::shapes::{CircleCommand, RectangleCommand, ShapeCommand, SquiggleCommand};

    fn p(x: u32, y: u32) -> Point {
        Point::new(x, y)
    }

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn filled_circle_records_filled_oval() {
        let mut list = DrawList::new();
        let circle = CircleCommand::new(p(5, 5), 3, ShapeStyle::solid(RED));
        ShapeCommand::from(circle).record(&mut list);
        assert_eq!(
            list.items(),
            &[DrawCmd::Oval { bounds: Rect::new(2, 2, 6, 6), color: RED, mode: PaintMode::Fill }]
        );
    }

    #[test]
    fn outlined_rectangle_records_normalized_stroke() {
        let mut list = DrawList::new();
        ShapeCommand::from(RectangleCommand::new(p(9, 1), p(3, 7), ShapeStyle::outlined(RED)))
            .record(&mut list);
        assert_eq!(
            list.items(),
            &[DrawCmd::Rect { bounds: Rect::new(3, 1, 6, 6), color: RED, mode: PaintMode::Stroke }]
        );
    }

    #[test]
    fn squiggle_records_one_segment_per_pair() {
        let mut list = DrawList::new();
        let s =
            SquiggleCommand::with_points(vec![p(0, 0), p(1, 1), p(2, 0)], ShapeStyle::solid(RED));
        ShapeCommand::from(s).record(&mut list);
        assert_eq!(
            list.items(),
            &[
                DrawCmd::Line { from: p(0, 0), to: p(1, 1), color: RED },
                DrawCmd::Line { from: p(1, 1), to: p(2, 0), color: RED },
            ]
        );
    }

    #[test]
    fn short_squiggles_record_nothing() {
        let mut list = DrawList::new();
        ShapeCommand::from(SquiggleCommand::new(ShapeStyle::outlined(RED))).record(&mut list);
        ShapeCommand::from(SquiggleCommand::with_points(vec![p(4, 4)], ShapeStyle::outlined(RED)))
            .record(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn replay_preserves_order() {
        struct Collect(Vec<DrawCmd>);
        impl Renderer for Collect {
            fn draw(&mut self, cmd: &DrawCmd) {
                self.0.push(cmd.clone());
            }
        }

        let mut list = DrawList::new();
        list.push_line(p(0, 0), p(1, 0), RED);
        list.push_rect(Rect::new(0, 0, 1, 1), RED, true);

        let mut out = Collect(Vec::new());
        list.replay(&mut out);
        assert_eq!(out.0, list.items());
    }
}
