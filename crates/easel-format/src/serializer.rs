use std::fmt::Write as _;
use std::io::{self, Write};

use easel_engine::paint::ShapeStyle;
use easel_engine::shapes::{CircleCommand, RectangleCommand, ShapeCommand, SquiggleCommand};

use crate::grammar;

// ── Options ───────────────────────────────────────────────────────────────

/// Line terminator written after each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`, as the desktop tool has always written.
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(u8),
    None,
}

impl Indent {
    fn write_to(self, out: &mut String) {
        match self {
            Indent::Tab => out.push('\t'),
            Indent::Spaces(n) => out.extend(std::iter::repeat_n(' ', usize::from(n))),
            Indent::None => {}
        }
    }
}

/// Output formatting for [`serialize_with`] and [`write_shapes`].
///
/// Only whitespace is configurable; the parser ignores all of it, so every
/// option produces an equivalent file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveOptions {
    pub line_ending: LineEnding,
    /// Indent for fields; squiggle points get it twice.
    pub indent: Indent,
}

impl SaveOptions {
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

// ── Block emission ────────────────────────────────────────────────────────

struct Emitter<'o> {
    out: String,
    opts: &'o SaveOptions,
}

impl Emitter<'_> {
    fn line(&mut self, depth: usize, args: std::fmt::Arguments<'_>) {
        for _ in 0..depth {
            self.opts.indent.write_to(&mut self.out);
        }
        // Writing into a `String` cannot fail.
        let _ = self.out.write_fmt(args);
        self.out.push_str(self.opts.line_ending.as_str());
    }

    fn style(&mut self, style: ShapeStyle) {
        let c = style.color;
        self.line(1, format_args!("color:{},{},{}", c.r, c.g, c.b));
        self.line(1, format_args!("filled:{}", style.filled));
    }

    fn shape(&mut self, shape: &ShapeCommand) {
        match shape {
            ShapeCommand::Circle(c) => self.circle(c),
            ShapeCommand::Rectangle(r) => self.rectangle(r),
            ShapeCommand::Squiggle(s) => self.squiggle(s),
        }
    }

    fn circle(&mut self, c: &CircleCommand) {
        self.line(0, format_args!("{}", grammar::CIRCLE_START));
        self.style(c.style);
        self.line(1, format_args!("center:{}", c.centre));
        self.line(1, format_args!("radius:{}", c.radius));
        self.line(0, format_args!("{}", grammar::CIRCLE_END));
    }

    fn rectangle(&mut self, r: &RectangleCommand) {
        self.line(0, format_args!("{}", grammar::RECTANGLE_START));
        self.style(r.style);
        self.line(1, format_args!("p1:{}", r.p1));
        self.line(1, format_args!("p2:{}", r.p2));
        self.line(0, format_args!("{}", grammar::RECTANGLE_END));
    }

    /// The final point of the stroke is not written: a squiggle loses its last
    /// point on every save/load cycle.
    fn squiggle(&mut self, s: &SquiggleCommand) {
        self.line(0, format_args!("{}", grammar::SQUIGGLE_START));
        self.style(s.style);
        self.line(1, format_args!("{}", grammar::POINTS_START));
        let kept = s.points.len().saturating_sub(1);
        for p in &s.points[..kept] {
            self.line(2, format_args!("point:{p}"));
        }
        self.line(1, format_args!("{}", grammar::POINTS_END));
        self.line(0, format_args!("{}", grammar::SQUIGGLE_END));
    }
}

// ── Public entry points ───────────────────────────────────────────────────

/// Serializes `shapes` with the default options.
pub fn serialize(shapes: &[ShapeCommand]) -> String {
    serialize_with(shapes, &SaveOptions::default())
}

/// Serializes `shapes`: header, one block per shape in order, footer.
pub fn serialize_with(shapes: &[ShapeCommand], opts: &SaveOptions) -> String {
    let mut e = Emitter { out: String::new(), opts };
    e.line(0, format_args!("{}", grammar::FILE_START));
    for shape in shapes {
        e.shape(shape);
    }
    e.line(0, format_args!("{}", grammar::FILE_END));
    log::debug!("serialized {} shapes ({} bytes)", shapes.len(), e.out.len());
    e.out
}

/// Writes `shapes` to `sink`, flushes it, and drops it.
///
/// A write failure aborts immediately and is returned as-is.
pub fn write_shapes<W: Write>(
    shapes: &[ShapeCommand],
    mut sink: W,
    opts: &SaveOptions,
) -> io::Result<()> {
    let text = serialize_with(shapes, opts);
    sink.write_all(text.as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::coords::Point;
    use easel_engine::paint::Color;

    fn style() -> ShapeStyle {
        ShapeStyle::new(Color::rgb(10, 20, 30), true)
    }

    #[test]
    fn empty_scene() {
        assert_eq!(
            serialize(&[]),
            "Paint Save File Version 1.0\r\nEnd Paint Save File\r\n"
        );
    }

    #[test]
    fn circle_block_layout() {
        let c = CircleCommand::new(Point::new(5, 5), 3, style());
        let text = serialize_with(&[c.into()], &SaveOptions::default().line_ending(LineEnding::Lf));
        assert_eq!(
            text,
            "Paint Save File Version 1.0\n\
             Circle\n\
             \tcolor:10,20,30\n\
             \tfilled:true\n\
             \tcenter:(5,5)\n\
             \tradius:3\n\
             End Circle\n\
             End Paint Save File\n"
        );
    }

    #[test]
    fn rectangle_keeps_corner_order() {
        let r = RectangleCommand::new(Point::new(9, 9), Point::new(1, 2), style());
        let text = serialize(&[r.into()]);
        assert!(text.contains("\tp1:(9,9)\r\n\tp2:(1,2)\r\n"), "{text}");
    }

    #[test]
    fn squiggle_drops_final_point() {
        let s = SquiggleCommand::with_points(
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)],
            style(),
        );
        let opts = SaveOptions::default().indent(Indent::Spaces(2));
        let text = serialize_with(&[s.into()], &opts);
        assert!(
            text.contains("    point:(1,1)\r\n    point:(2,2)\r\n  end points\r\n"),
            "{text}"
        );
        assert!(!text.contains("(3,3)"), "{text}");
    }

    #[test]
    fn pushed_points_are_written_in_stroke_order() {
        let mut s = SquiggleCommand::new(style());
        s.push(Point::new(9, 0));
        s.push(Point::new(0, 9));
        s.push(Point::new(4, 4));
        s.push(Point::new(5, 5));
        let text = serialize_with(&[s.into()], &SaveOptions::default().line_ending(LineEnding::Lf));
        assert!(
            text.contains("\t\tpoint:(9,0)\n\t\tpoint:(0,9)\n\t\tpoint:(4,4)\n\tend points\n"),
            "{text}"
        );
    }

    #[test]
    fn empty_squiggle_writes_empty_points_block() {
        let text = serialize(&[SquiggleCommand::new(style()).into()]);
        assert!(text.contains("\tpoints\r\n\tend points\r\n"), "{text}");
    }

    #[test]
    fn write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = write_shapes(&[], Broken, &SaveOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
