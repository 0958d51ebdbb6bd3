/// Opaque sRGB color with 8-bit channels.
///
/// Channels are stored as integers so that values read from a save file are
/// written back unchanged. Renderers that work in normalized floats go through
/// [`to_unit`](Self::to_unit) / [`from_unit`](Self::from_unit).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from normalized `f32` channels in `[0, 1]`.
    ///
    /// Channels are clamped, then quantized with round-to-nearest, so
    /// `Color::from_unit(c.to_unit())` is always `c`. Non-finite input maps to 0.
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(quantize(r), quantize(g), quantize(b))
    }

    /// Returns normalized `f32` channels in `[0, 1]`.
    #[inline]
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
