use super::Point;

/// Axis-aligned drawing rectangle (top-left origin, signed pixels).
///
/// Width and height are never negative for rectangles built through
/// [`Rect::from_corners`] or [`Rect::around`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    #[inline]
    pub const fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding rectangle of two opposite corners, in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let tl = a.min(b);
        let br = a.max(b);
        Rect::new(
            i64::from(tl.x),
            i64::from(tl.y),
            i64::from(br.x - tl.x),
            i64::from(br.y - tl.y),
        )
    }

    /// Square of side `2 * radius` centred on `centre`.
    #[inline]
    pub fn around(centre: Point, radius: u32) -> Self {
        let r = i64::from(radius);
        Rect::new(i64::from(centre.x) - r, i64::from(centre.y) - r, 2 * r, 2 * r)
    }
}
