//! Core drawing data model.
//!
//! Colors, the curated palette, and the brush configuration that the
//! drawing surface paints with. Nothing here touches pixels; the raster
//! side lives in `mood-render`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let pair = |i: usize| -> Option<u8> { Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?) };

        match bytes.len() {
            3 => Some(Self::rgb(
                hex_val(bytes[0])? * 17,
                hex_val(bytes[1])? * 17,
                hex_val(bytes[2])? * 17,
            )),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Emit as uppercase `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────

/// One of the fifteen curated swatches. Free-form colors are not accepted
/// anywhere a brush color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    LightPink,
    HotPink,
    SalmonPink,
    Pink,
    PastelPink,
    CoralRed,
    LightSalmon,
    Moccasin,
    Mint,
    SkyBlue,
    Plum,
    Lavender,
    Khaki,
    White,
    DarkGray,
}

impl PaletteColor {
    /// Swatches in toolbar order.
    pub const ALL: [PaletteColor; 15] = [
        PaletteColor::LightPink,
        PaletteColor::HotPink,
        PaletteColor::SalmonPink,
        PaletteColor::Pink,
        PaletteColor::PastelPink,
        PaletteColor::CoralRed,
        PaletteColor::LightSalmon,
        PaletteColor::Moccasin,
        PaletteColor::Mint,
        PaletteColor::SkyBlue,
        PaletteColor::Plum,
        PaletteColor::Lavender,
        PaletteColor::Khaki,
        PaletteColor::White,
        PaletteColor::DarkGray,
    ];

    pub const fn color(self) -> Color {
        match self {
            PaletteColor::LightPink => Color::rgb(0xFF, 0xB6, 0xC1),
            PaletteColor::HotPink => Color::rgb(0xFF, 0x69, 0xB4),
            PaletteColor::SalmonPink => Color::rgb(0xFF, 0x91, 0xA4),
            PaletteColor::Pink => Color::rgb(0xFF, 0xC0, 0xCB),
            PaletteColor::PastelPink => Color::rgb(0xFF, 0xD1, 0xDC),
            PaletteColor::CoralRed => Color::rgb(0xFF, 0x6B, 0x6B),
            PaletteColor::LightSalmon => Color::rgb(0xFF, 0xA0, 0x7A),
            PaletteColor::Moccasin => Color::rgb(0xFF, 0xE4, 0xB5),
            PaletteColor::Mint => Color::rgb(0x98, 0xD8, 0xC8),
            PaletteColor::SkyBlue => Color::rgb(0x87, 0xCE, 0xEB),
            PaletteColor::Plum => Color::rgb(0xDD, 0xA0, 0xDD),
            PaletteColor::Lavender => Color::rgb(0xE6, 0xE6, 0xFA),
            PaletteColor::Khaki => Color::rgb(0xF0, 0xE6, 0x8C),
            PaletteColor::White => Color::rgb(0xFF, 0xFF, 0xFF),
            PaletteColor::DarkGray => Color::rgb(0x2D, 0x2D, 0x2D),
        }
    }

    /// Human-readable swatch name (tooltip text).
    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::LightPink => "Light pink",
            PaletteColor::HotPink => "Hot pink",
            PaletteColor::SalmonPink => "Salmon pink",
            PaletteColor::Pink => "Pink",
            PaletteColor::PastelPink => "Pastel pink",
            PaletteColor::CoralRed => "Coral red",
            PaletteColor::LightSalmon => "Light salmon",
            PaletteColor::Moccasin => "Moccasin",
            PaletteColor::Mint => "Mint",
            PaletteColor::SkyBlue => "Sky blue",
            PaletteColor::Plum => "Plum",
            PaletteColor::Lavender => "Lavender",
            PaletteColor::Khaki => "Khaki",
            PaletteColor::White => "White",
            PaletteColor::DarkGray => "Dark gray",
        }
    }

    /// Look up a swatch by its hex value. Colors outside the palette
    /// return `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let color = Color::from_hex(hex)?;
        Self::ALL.into_iter().find(|p| p.color() == color)
    }

    /// Swatch at a zero-based toolbar position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Default for PaletteColor {
    fn default() -> Self {
        PaletteColor::HotPink
    }
}

// ─── Brush ───────────────────────────────────────────────────────────────

/// Brush width in on-screen pixels, always within `[MIN, MAX]`.
///
/// Construction is the range check: an out-of-range request yields `None`
/// and never reaches the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BrushWidth(u32);

impl BrushWidth {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 50;
    pub const DEFAULT: BrushWidth = BrushWidth(8);

    pub fn new(width: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&width).then_some(Self(width))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for BrushWidth {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BrushWidth::new(value).ok_or_else(|| {
            format!(
                "brush width {value} outside [{}, {}]",
                BrushWidth::MIN,
                BrushWidth::MAX
            )
        })
    }
}

impl From<BrushWidth> for u32 {
    fn from(w: BrushWidth) -> u32 {
        w.0
    }
}

/// Current drawing tool state.
///
/// The eraser flag overrides the chosen color: erasing is painting in the
/// background color, so exactly one of "draw" and "erase" is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brush {
    pub color: PaletteColor,
    pub width: BrushWidth,
    pub eraser: bool,
}

impl Brush {
    /// The color the next stroke is painted with.
    pub fn effective_color(&self, background: Color) -> Color {
        if self.eraser {
            background
        } else {
            self.color.color()
        }
    }

    /// Pick a swatch; always leaves eraser mode.
    pub fn select_color(&mut self, color: PaletteColor) {
        self.color = color;
        self.eraser = false;
    }

    /// Flip eraser mode, returning the new state.
    pub fn toggle_eraser(&mut self) -> bool {
        self.eraser = !self.eraser;
        self.eraser
    }
}
