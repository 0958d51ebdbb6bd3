//! Literal tokens and per-line patterns of Paint Save File Version 1.0.
//!
//! Every pattern is anchored and matched against a line with all whitespace
//! removed, so `End Paint Save File` and `EndPaintSaveFile` are the same token.

use std::sync::LazyLock;

use regex::Regex;

/// Header line as written by the serializer.
pub const FILE_START: &str = "Paint Save File Version 1.0";
/// Footer line as written by the serializer.
pub const FILE_END: &str = "End Paint Save File";

pub const CIRCLE_START: &str = "Circle";
pub const CIRCLE_END: &str = "End Circle";
pub const RECTANGLE_START: &str = "Rectangle";
pub const RECTANGLE_END: &str = "End Rectangle";
pub const SQUIGGLE_START: &str = "Squiggle";
pub const SQUIGGLE_END: &str = "End Squiggle";
pub const POINTS_START: &str = "points";
pub const POINTS_END: &str = "end points";

/// One channel: 0-255 without leading zeros.
const CHANNEL: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";

fn anchored(body: &str) -> Regex {
    Regex::new(&format!("^{body}$")).expect("grammar pattern must compile")
}

pub(crate) static COLOR: LazyLock<Regex> =
    LazyLock::new(|| anchored(&format!("color:{CHANNEL}(?:,{CHANNEL}){{2}}")));
pub(crate) static FILLED: LazyLock<Regex> = LazyLock::new(|| anchored("filled:(?:true|false)"));
pub(crate) static CENTER: LazyLock<Regex> = LazyLock::new(|| anchored(r"center:\([0-9]+,[0-9]+\)"));
pub(crate) static RADIUS: LazyLock<Regex> = LazyLock::new(|| anchored("radius:[0-9]+"));
pub(crate) static P1: LazyLock<Regex> = LazyLock::new(|| anchored(r"p1:\([0-9]+,[0-9]+\)"));
pub(crate) static P2: LazyLock<Regex> = LazyLock::new(|| anchored(r"p2:\([0-9]+,[0-9]+\)"));
pub(crate) static POINT: LazyLock<Regex> = LazyLock::new(|| anchored(r"point:\([0-9]+,[0-9]+\)"));

/// Runs of ASCII digits, scanned left to right.
pub(crate) static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("digit pattern must compile"));

/// ASCII whitespace: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)+").expect("whitespace pattern must compile"));

/// Removes every ASCII whitespace character, interior ones included. Other
/// Unicode spaces are kept and make the line unrecognizable.
pub fn strip_whitespace(line: &str) -> String {
    WHITESPACE.replace_all(line, "").into_owned()
}
