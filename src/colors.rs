//! # Color Palette
//!
//! Fixed colours used by the paint cycle, kept in a platform-neutral format.
//! The Direct2D shell converts them to `D2D1_COLOR_F` at draw time.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Straight (non-premultiplied) RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

/// Application colour palette
pub struct Colors;

impl Colors {
    /// Clear colour of the surface (CSS SkyBlue, 0x87CEEB)
    pub const BACKGROUND: Rgba = Rgba::opaque(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);
    /// Ellipse fill
    pub const FILL: Rgba = Rgba::opaque(1.0, 0.0, 1.0);
}

/// Rejected colour literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid colour `{0}`, expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Rgba::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02X}{:02X}{:02X}", to8(self.r), to8(self.g), to8(self.b))?;
        if self.a < 1.0 {
            write!(f, "{:02X}", to8(self.a))?;
        }
        Ok(())
    }
}
