use easel_engine::coords::Point;
use easel_engine::paint::Color;

use crate::grammar::{self, strip_whitespace};

// ── Token ─────────────────────────────────────────────────────────────────

/// Classification of one save-file line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Structure
    FileStart,
    FileEnd,
    CircleStart,
    CircleEnd,
    RectangleStart,
    RectangleEnd,
    SquiggleStart,
    SquiggleEnd,
    PointsStart,
    PointsEnd,
    // Fields
    Color(Color),
    Filled(bool),
    Center(Point),
    Radius(u32),
    P1(Point),
    P2(Point),
    Point(Point),
    // Whitespace-only line
    Blank,
    /// Anything that matches no pattern; holds the whitespace-stripped text.
    Unknown(String),
}

impl Token {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::FileStart => format!("'{}'", grammar::FILE_START),
            Token::FileEnd => format!("'{}'", grammar::FILE_END),
            Token::CircleStart => format!("'{}'", grammar::CIRCLE_START),
            Token::CircleEnd => format!("'{}'", grammar::CIRCLE_END),
            Token::RectangleStart => format!("'{}'", grammar::RECTANGLE_START),
            Token::RectangleEnd => format!("'{}'", grammar::RECTANGLE_END),
            Token::SquiggleStart => format!("'{}'", grammar::SQUIGGLE_START),
            Token::SquiggleEnd => format!("'{}'", grammar::SQUIGGLE_END),
            Token::PointsStart => format!("'{}'", grammar::POINTS_START),
            Token::PointsEnd => format!("'{}'", grammar::POINTS_END),
            Token::Color(_) => "color field".to_string(),
            Token::Filled(_) => "filled field".to_string(),
            Token::Center(_) => "center field".to_string(),
            Token::Radius(_) => "radius field".to_string(),
            Token::P1(_) => "p1 field".to_string(),
            Token::P2(_) => "p2 field".to_string(),
            Token::Point(_) => "point".to_string(),
            Token::Blank => "blank line".to_string(),
            Token::Unknown(s) => format!("unrecognized line {:?}", s),
        }
    }
}

// ── Classification ────────────────────────────────────────────────────────

/// Classifies one raw line.
///
/// Whitespace is stripped first. Field values are extracted by scanning digit
/// runs in order after the field's `:`; the full-line pattern has already
/// fixed how many there are. `Err` means the line is well-formed but a
/// number does not fit its type.
pub fn classify(raw: &str) -> Result<Token, String> {
    let line = strip_whitespace(raw);

    if line.is_empty() {
        return Ok(Token::Blank);
    }

    // Literal tokens.
    let literals: [(&str, Token); 10] = [
        (grammar::FILE_START, Token::FileStart),
        (grammar::FILE_END, Token::FileEnd),
        (grammar::CIRCLE_START, Token::CircleStart),
        (grammar::CIRCLE_END, Token::CircleEnd),
        (grammar::RECTANGLE_START, Token::RectangleStart),
        (grammar::RECTANGLE_END, Token::RectangleEnd),
        (grammar::SQUIGGLE_START, Token::SquiggleStart),
        (grammar::SQUIGGLE_END, Token::SquiggleEnd),
        (grammar::POINTS_START, Token::PointsStart),
        (grammar::POINTS_END, Token::PointsEnd),
    ];
    for (lit, tok) in literals {
        if line == strip_whitespace(lit) {
            return Ok(tok);
        }
    }

    // Templated fields.
    if grammar::COLOR.is_match(&line) {
        let [r, g, b] = numbers::<3>(&line)?;
        return Ok(Token::Color(Color::rgb(channel(r)?, channel(g)?, channel(b)?)));
    }
    if grammar::FILLED.is_match(&line) {
        return Ok(Token::Filled(line.ends_with("true")));
    }
    if grammar::CENTER.is_match(&line) {
        return point(&line).map(Token::Center);
    }
    if grammar::RADIUS.is_match(&line) {
        let [r] = numbers::<1>(&line)?;
        return Ok(Token::Radius(r));
    }
    if grammar::P1.is_match(&line) {
        return point(&line).map(Token::P1);
    }
    if grammar::P2.is_match(&line) {
        return point(&line).map(Token::P2);
    }
    if grammar::POINT.is_match(&line) {
        return point(&line).map(Token::Point);
    }

    Ok(Token::Unknown(line))
}

fn point(line: &str) -> Result<Point, String> {
    let [x, y] = numbers::<2>(line)?;
    Ok(Point::new(x, y))
}

fn channel(v: u32) -> Result<u8, String> {
    u8::try_from(v).map_err(|_| format!("color channel {v} is out of range 0-255"))
}

/// First `N` digit runs of the field value (the text after the first `:`).
fn numbers<const N: usize>(line: &str) -> Result<[u32; N], String> {
    let value = line.split_once(':').map_or(line, |(_, v)| v);
    let mut out = [0u32; N];
    let mut found = 0;
    for (slot, m) in out.iter_mut().zip(grammar::DIGITS.find_iter(value)) {
        *slot = m
            .as_str()
            .parse()
            .map_err(|_| format!("number {} is too large", m.as_str()))?;
        found += 1;
    }
    if found < N {
        return Err(format!("expected {N} numbers in {line:?}, found {found}"));
    }
    Ok(out)
}
