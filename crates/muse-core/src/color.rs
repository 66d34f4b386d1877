//! Random accent colors.

use rand::{rngs::StdRng, Rng};
use std::fmt;
use tracing::debug;

/// Number of distinct 24-bit RGB values.
pub const COLOR_SPACE: u32 = 1 << 24;

const LIGHT_TEXT: Color = Color::new(0xff, 0xff, 0xff);
const DARK_TEXT: Color = Color::new(0x1e, 0x23, 0x26);

/// One RGB color. Displays as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The packed `0xRRGGBB` value.
    pub fn value(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// White or near-black, whichever reads better on top of `self`.
    pub fn contrasting_text(self) -> Color {
        let luma =
            0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        if luma > 150.0 {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }
}

/// Takes the low 24 bits.
impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.value())
    }
}

/// Draws colors uniformly over the whole RGB cube.
#[derive(Debug)]
pub struct ColorGenerator<R = StdRng> {
    rng: R,
}

impl<R: Rng> ColorGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_color(&mut self) -> Color {
        let color = Color::from(self.rng.gen_range(0..COLOR_SPACE));
        debug!(%color, "generated color");
        color
    }
}
