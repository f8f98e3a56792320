//! Colour type and HSL tone adjustment.

use std::fmt;

use palette::{Hsl, IntoColor, Srgb};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Magenta (used for the broken-item placeholder).
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Raise HSL lightness by `percent` of the remaining range.
    pub fn lighten(self, percent: f32) -> Self {
        adjust_lightness(self, percent.abs())
    }

    /// Lower HSL lightness by `percent` of the current lightness.
    pub fn darken(self, percent: f32) -> Self {
        adjust_lightness(self, -percent.abs())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb_out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb_out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        colour.a,
    )
}
