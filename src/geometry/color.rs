//! Colors and two-stop gradients used to shade faces
//!
//! Every solid derives its cap colors from a single base color. The
//! gradient's second stop is the base color pushed 1% toward white, and each
//! builder picks a mix ratio between the two stops for its faces.

/// An opaque RGB color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::gray(255);

    /// Neutral gray used for every side wall
    pub const WALL: Color = Color::gray(150);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels equal
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Linear interpolation toward `other`
    ///
    /// `amount` is clamped to [0, 1]; 0 returns `self`, 1 returns `other`.
    pub fn lerp(self, other: Color, amount: f32) -> Color {
        let t = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let value = a as f32 + (b as f32 - a as f32) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// How far the second gradient stop is pushed toward white
const HIGHLIGHT_AMOUNT: f32 = 0.01;

/// A two-stop gradient derived from a base color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// The base color itself
    pub start: Color,
    /// The base color blended slightly toward white
    pub end: Color,
}

impl Gradient {
    /// Derive the gradient for a base color
    pub fn from_base(base: Color) -> Self {
        Self {
            start: base,
            end: base.lerp(Color::WHITE, HIGHLIGHT_AMOUNT),
        }
    }

    /// Sample the gradient (0 = start, 1 = end)
    pub fn mix(&self, amount: f32) -> Color {
        self.start.lerp(self.end, amount)
    }
}
