//! Shape commands: the vector shapes a paint scene is made of.
//!
//! Extending the set of shapes:
//! - add a new module under `shapes::*` with its command struct
//! - add a new variant to [`ShapeCommand`]
//! - the compiler then points at every capability match that needs an arm
//!   (draw projection here, serializer and parser in `easel-format`)

mod circle;
mod rectangle;
mod squiggle;

pub use circle::CircleCommand;
pub use rectangle::RectangleCommand;
pub use squiggle::SquiggleCommand;

use crate::paint::{Color, ShapeStyle};
use crate::scene::DrawList;

/// Variant tag of a [`ShapeCommand`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Squiggle,
}

impl ShapeKind {
    /// Human-readable name, matching the block keyword in a save file.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Squiggle => "Squiggle",
        }
    }
}

/// One drawable shape plus its paint style.
///
/// The variant is fixed once created; fields inside it are freely mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeCommand {
    Circle(CircleCommand),
    Rectangle(RectangleCommand),
    Squiggle(SquiggleCommand),
}

impl ShapeCommand {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeCommand::Circle(_) => ShapeKind::Circle,
            ShapeCommand::Rectangle(_) => ShapeKind::Rectangle,
            ShapeCommand::Squiggle(_) => ShapeKind::Squiggle,
        }
    }

    #[inline]
    pub fn style(&self) -> ShapeStyle {
        match self {
            ShapeCommand::Circle(c) => c.style,
            ShapeCommand::Rectangle(r) => r.style,
            ShapeCommand::Squiggle(s) => s.style,
        }
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            ShapeCommand::Circle(c) => &mut c.style,
            ShapeCommand::Rectangle(r) => &mut r.style,
            ShapeCommand::Squiggle(s) => &mut s.style,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.style().color
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.style().filled
    }

    /// Appends this shape's drawing primitives to `list`.
    pub fn record(&self, list: &mut DrawList) {
        match self {
            ShapeCommand::Circle(c) => c.record(list),
            ShapeCommand::Rectangle(r) => r.record(list),
            ShapeCommand::Squiggle(s) => s.record(list),
        }
    }
}

impl From<CircleCommand> for ShapeCommand {
    fn from(c: CircleCommand) -> Self {
        ShapeCommand::Circle(c)
    }
}

impl From<RectangleCommand> for ShapeCommand {
    fn from(r: RectangleCommand) -> Self {
        ShapeCommand::Rectangle(r)
    }
}

impl From<SquiggleCommand> for ShapeCommand {
    fn from(s: SquiggleCommand) -> Self {
        ShapeCommand::Squiggle(s)
    }
}
