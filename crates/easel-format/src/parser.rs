use std::io::{self, BufRead};

use easel_engine::coords::Point;
use easel_engine::paint::{Color, ShapeStyle};
use easel_engine::shapes::{CircleCommand, RectangleCommand, ShapeCommand, SquiggleCommand};

use crate::error::{ErrorKind, PaintFileError};
use crate::grammar;
use crate::lexer::{classify, Token};

// ── Block accumulators ────────────────────────────────────────────────────

/// Fields of a block are filled strictly in declaration order. `next` is the
/// index of the first empty slot: a field at index `i` is accepted only when
/// `i == next`.
fn check_slot(
    line: usize,
    shape: &str,
    names: &[&str],
    next: usize,
    slot: usize,
) -> Result<(), PaintFileError> {
    if slot == next {
        Ok(())
    } else if slot < next {
        Err(PaintFileError::structure(
            line,
            format!("duplicate {} field in {shape}", names[slot]),
        ))
    } else {
        Err(PaintFileError::structure(
            line,
            format!("expected {} field in {shape}, found {}", names[next], names[slot]),
        ))
    }
}

const CIRCLE_FIELDS: [&str; 4] = ["color", "filled", "center", "radius"];
const RECTANGLE_FIELDS: [&str; 4] = ["color", "filled", "p1", "p2"];
const SQUIGGLE_FIELDS: [&str; 4] = ["color", "filled", "points", "end points"];

#[derive(Debug, Default)]
struct CircleFields {
    color: Option<Color>,
    filled: Option<bool>,
    center: Option<Point>,
    radius: Option<u32>,
}

impl CircleFields {
    fn next(&self) -> usize {
        [self.color.is_some(), self.filled.is_some(), self.center.is_some(), self.radius.is_some()]
            .iter()
            .take_while(|f| **f)
            .count()
    }

    fn build(self, line: usize) -> Result<CircleCommand, PaintFileError> {
        match (self.color, self.filled, self.center, self.radius) {
            (Some(color), Some(filled), Some(center), Some(radius)) => {
                Ok(CircleCommand::new(center, radius, ShapeStyle::new(color, filled)))
            }
            _ => Err(missing(line, "Circle", &CIRCLE_FIELDS, self.next())),
        }
    }
}

#[derive(Debug, Default)]
struct RectangleFields {
    color: Option<Color>,
    filled: Option<bool>,
    p1: Option<Point>,
    p2: Option<Point>,
}

impl RectangleFields {
    fn next(&self) -> usize {
        [self.color.is_some(), self.filled.is_some(), self.p1.is_some(), self.p2.is_some()]
            .iter()
            .take_while(|f| **f)
            .count()
    }

    fn build(self, line: usize) -> Result<RectangleCommand, PaintFileError> {
        match (self.color, self.filled, self.p1, self.p2) {
            (Some(color), Some(filled), Some(p1), Some(p2)) => {
                Ok(RectangleCommand::new(p1, p2, ShapeStyle::new(color, filled)))
            }
            _ => Err(missing(line, "Rectangle", &RECTANGLE_FIELDS, self.next())),
        }
    }
}

#[derive(Debug, Default)]
struct SquiggleFields {
    color: Option<Color>,
    filled: Option<bool>,
    points: Vec<Point>,
    opened: bool,
    closed: bool,
}

impl SquiggleFields {
    fn next(&self) -> usize {
        [self.color.is_some(), self.filled.is_some(), self.opened, self.closed]
            .iter()
            .take_while(|f| **f)
            .count()
    }

    fn build(self, line: usize) -> Result<SquiggleCommand, PaintFileError> {
        match (self.color, self.filled, self.closed) {
            (Some(color), Some(filled), true) => {
                Ok(SquiggleCommand::with_points(self.points, ShapeStyle::new(color, filled)))
            }
            _ => Err(missing(line, "Squiggle", &SQUIGGLE_FIELDS, self.next())),
        }
    }
}

fn missing(line: usize, shape: &str, names: &[&str], next: usize) -> PaintFileError {
    PaintFileError::structure(line, format!("{shape} block ends before its {} field", names[next]))
}

// ── State machine ─────────────────────────────────────────────────────────

#[derive(Debug)]
enum State {
    ExpectHeader,
    Dispatch,
    Circle(CircleFields),
    Rectangle(RectangleFields),
    Squiggle(SquiggleFields),
    /// Inside a squiggle's `points` ... `end points` block.
    Points(SquiggleFields),
    Done,
    /// Absorbing: every further line reports the original failure.
    Failed { kind: ErrorKind, line: usize, message: String },
}

/// Line-at-a-time parser for Paint Save File Version 1.0.
///
/// Feed lines in order with [`feed`](Self::feed), then call
/// [`finish`](Self::finish). The first error is terminal: nothing parsed
/// before it is returned.
#[derive(Debug)]
pub struct Parser {
    state: State,
    line: usize,
    shapes: Vec<ShapeCommand>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self { state: State::ExpectHeader, line: 0, shapes: Vec::new() }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Consumes the next raw line.
    pub fn feed(&mut self, raw: &str) -> Result<(), PaintFileError> {
        if let State::Failed { kind, line, message } = &self.state {
            return Err(rebuild(*kind, *line, message));
        }

        self.line += 1;
        log::trace!("{:>5} | {}", self.line, raw);

        let state = std::mem::replace(&mut self.state, State::Done);
        match self.step(state, raw) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                log::debug!("paint file rejected: {e}");
                if let Some(line) = e.line() {
                    self.state = State::Failed { kind: e.kind(), line, message: message_of(&e) };
                }
                Err(e)
            }
        }
    }

    /// Ends the input and returns the parsed shapes in file order.
    pub fn finish(self) -> Result<Vec<ShapeCommand>, PaintFileError> {
        let eof = self.line + 1;
        match self.state {
            State::Done => {
                log::debug!("parsed {} shapes from {} lines", self.shapes.len(), self.line);
                Ok(self.shapes)
            }
            State::Failed { kind, line, message } => Err(rebuild(kind, line, &message)),
            State::ExpectHeader => Err(PaintFileError::header(
                eof,
                format!("expected '{}', found end of file", grammar::FILE_START),
            )),
            State::Dispatch => Err(PaintFileError::structure(
                eof,
                format!("expected '{}', found end of file", grammar::FILE_END),
            )),
            State::Circle(_) => Err(unterminated(eof, grammar::CIRCLE_END)),
            State::Rectangle(_) => Err(unterminated(eof, grammar::RECTANGLE_END)),
            State::Squiggle(_) => Err(unterminated(eof, grammar::SQUIGGLE_END)),
            State::Points(_) => Err(unterminated(eof, grammar::POINTS_END)),
        }
    }

    fn step(&mut self, state: State, raw: &str) -> Result<State, PaintFileError> {
        let line = self.line;
        let token = match (classify(raw), &state) {
            (Ok(token), _) => token,
            (Err(msg), State::ExpectHeader) => return Err(PaintFileError::header(line, msg)),
            (Err(msg), _) => return Err(PaintFileError::structure(line, msg)),
        };

        match state {
            // ── Header ────────────────────────────────────────────────────
            State::ExpectHeader => match token {
                Token::FileStart => Ok(State::Dispatch),
                other => Err(PaintFileError::header(
                    line,
                    format!("expected '{}', found {}", grammar::FILE_START, other.describe()),
                )),
            },

            // ── Between blocks ────────────────────────────────────────────
            State::Dispatch => match token {
                Token::CircleStart => Ok(State::Circle(CircleFields::default())),
                Token::RectangleStart => Ok(State::Rectangle(RectangleFields::default())),
                Token::SquiggleStart => Ok(State::Squiggle(SquiggleFields::default())),
                Token::FileEnd => Ok(State::Done),
                Token::Blank => Ok(State::Dispatch),
                other => Err(PaintFileError::structure(
                    line,
                    format!(
                        "expected a shape or '{}', found {}",
                        grammar::FILE_END,
                        other.describe()
                    ),
                )),
            },

            // ── Circle ────────────────────────────────────────────────────
            State::Circle(mut f) => {
                let next = f.next();
                let check = |slot| check_slot(line, "Circle", &CIRCLE_FIELDS, next, slot);
                match token {
                    Token::CircleEnd => {
                        let c = f.build(line)?;
                        log::debug!("line {line}: circle at {} r={}", c.centre, c.radius);
                        self.shapes.push(c.into());
                        return Ok(State::Dispatch);
                    }
                    Token::Color(c) => {
                        check(0)?;
                        f.color = Some(c);
                    }
                    Token::Filled(b) => {
                        check(1)?;
                        f.filled = Some(b);
                    }
                    Token::Center(p) => {
                        check(2)?;
                        f.center = Some(p);
                    }
                    Token::Radius(r) => {
                        check(3)?;
                        f.radius = Some(r);
                    }
                    other => return Err(unexpected(line, "Circle", &CIRCLE_FIELDS, next, &other)),
                }
                Ok(State::Circle(f))
            }

            // ── Rectangle ─────────────────────────────────────────────────
            State::Rectangle(mut f) => {
                let next = f.next();
                let check = |slot| check_slot(line, "Rectangle", &RECTANGLE_FIELDS, next, slot);
                match token {
                    Token::RectangleEnd => {
                        let r = f.build(line)?;
                        log::debug!("line {line}: rectangle {} {}", r.p1, r.p2);
                        self.shapes.push(r.into());
                        return Ok(State::Dispatch);
                    }
                    Token::Color(c) => {
                        check(0)?;
                        f.color = Some(c);
                    }
                    Token::Filled(b) => {
                        check(1)?;
                        f.filled = Some(b);
                    }
                    Token::P1(p) => {
                        check(2)?;
                        f.p1 = Some(p);
                    }
                    Token::P2(p) => {
                        check(3)?;
                        f.p2 = Some(p);
                    }
                    other => {
                        return Err(unexpected(line, "Rectangle", &RECTANGLE_FIELDS, next, &other));
                    }
                }
                Ok(State::Rectangle(f))
            }

            // ── Squiggle ──────────────────────────────────────────────────
            State::Squiggle(mut f) => {
                let next = f.next();
                let check = |slot| check_slot(line, "Squiggle", &SQUIGGLE_FIELDS, next, slot);
                match token {
                    Token::SquiggleEnd => {
                        let s = f.build(line)?;
                        log::debug!("line {line}: squiggle with {} points", s.points.len());
                        self.shapes.push(s.into());
                        Ok(State::Dispatch)
                    }
                    Token::Color(c) => {
                        check(0)?;
                        f.color = Some(c);
                        Ok(State::Squiggle(f))
                    }
                    Token::Filled(b) => {
                        check(1)?;
                        f.filled = Some(b);
                        Ok(State::Squiggle(f))
                    }
                    Token::PointsStart => {
                        check(2)?;
                        f.opened = true;
                        Ok(State::Points(f))
                    }
                    other => Err(unexpected(line, "Squiggle", &SQUIGGLE_FIELDS, next, &other)),
                }
            }

            State::Points(mut f) => match token {
                Token::Point(p) => {
                    f.points.push(p);
                    Ok(State::Points(f))
                }
                Token::PointsEnd => {
                    f.closed = true;
                    Ok(State::Squiggle(f))
                }
                other => Err(PaintFileError::structure(
                    line,
                    format!(
                        "expected a point or '{}' in Squiggle, found {}",
                        grammar::POINTS_END,
                        other.describe()
                    ),
                )),
            },

            // ── After the footer ──────────────────────────────────────────
            State::Done => Err(PaintFileError::structure(
                line,
                format!("unexpected {} after '{}'", token.describe(), grammar::FILE_END),
            )),

            // `feed` returns before stepping a failed parser.
            State::Failed { kind, line, message } => Err(rebuild(kind, line, &message)),
        }
    }
}

fn unexpected(
    line: usize,
    shape: &str,
    names: &[&str],
    next: usize,
    found: &Token,
) -> PaintFileError {
    let expected = match names.get(next) {
        Some(name) => format!("{name} field"),
        None => format!("'End {shape}'"),
    };
    PaintFileError::structure(
        line,
        format!("expected {expected} in {shape}, found {}", found.describe()),
    )
}

fn unterminated(line: usize, end: &str) -> PaintFileError {
    PaintFileError::structure(line, format!("expected '{end}', found end of file"))
}

fn message_of(e: &PaintFileError) -> String {
    match e {
        PaintFileError::HeaderMismatch { message, .. }
        | PaintFileError::Structure { message, .. } => message.clone(),
        PaintFileError::Io(err) => err.to_string(),
    }
}

fn rebuild(kind: ErrorKind, line: usize, message: &str) -> PaintFileError {
    match kind {
        ErrorKind::HeaderMismatch => PaintFileError::header(line, message),
        _ => PaintFileError::structure(line, message),
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parses a sequence of lines (as produced by [`BufRead::lines`]).
///
/// The whole input is consumed before success is reported; on failure no
/// shapes are returned. A line rejected as [`io::ErrorKind::InvalidData`]
/// (not UTF-8) is a structural error on that line.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<ShapeCommand>, PaintFileError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        match line {
            Ok(line) => parser.feed(line.as_ref())?,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(PaintFileError::structure(parser.lines_read() + 1, e.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
    }
    parser.finish()
}

/// Parses save-file text held in memory.
pub fn parse_str(src: &str) -> Result<Vec<ShapeCommand>, PaintFileError> {
    parse_lines(src.lines().map(Ok::<_, io::Error>))
}

/// Parses everything `reader` yields.
///
/// Lines end at `\n` or `\r\n`. Bytes that are not UTF-8 are decoded
/// lossily, so such a line fails to match and is reported with its number.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<ShapeCommand>, PaintFileError> {
    let mut parser = Parser::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        parser.feed(&String::from_utf8_lossy(&buf))?;
    }
    parser.finish()
}

/// Parses `reader` and, only if the whole file is valid, appends the shapes to
/// `collector` in file order.
pub fn load_into<R, C>(reader: R, collector: &mut C) -> Result<usize, PaintFileError>
where
    R: BufRead,
    C: Extend<ShapeCommand>,
{
    let shapes = parse_reader(reader)?;
    let n = shapes.len();
    collector.extend(shapes);
    Ok(n)
}
