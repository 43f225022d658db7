//! Toolbar controls: brush width slider and palette swatches.
//!
//! Range enforcement happens here, at the control. The surface only ever
//! receives a `BrushWidth` that is already in range.

use mood_core::{Brush, BrushWidth, PaletteColor};

/// Integer slider over `[BrushWidth::MIN, BrushWidth::MAX]` with step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthControl {
    value: BrushWidth,
}

impl Default for WidthControl {
    fn default() -> Self {
        Self::new(BrushWidth::DEFAULT)
    }
}

impl WidthControl {
    pub const STEP: u32 = 1;

    pub fn new(value: BrushWidth) -> Self {
        Self { value }
    }

    pub fn value(&self) -> BrushWidth {
        self.value
    }

    pub fn min(&self) -> u32 {
        BrushWidth::MIN
    }

    pub fn max(&self) -> u32 {
        BrushWidth::MAX
    }

    /// Move the slider to `raw`. Out-of-range requests are rejected and
    /// the previous value is kept.
    pub fn set(&mut self, raw: u32) -> Option<BrushWidth> {
        let width = BrushWidth::new(raw)?;
        self.value = width;
        Some(width)
    }

    /// Nudge by whole steps, stopping at the ends of the range.
    pub fn nudge(&mut self, steps: i32) -> BrushWidth {
        let raw = (self.value.get() as i64 + steps as i64 * Self::STEP as i64)
            .clamp(BrushWidth::MIN as i64, BrushWidth::MAX as i64) as u32;
        self.set(raw).unwrap_or(self.value)
    }
}

/// A palette swatch as the toolbar shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub color: PaletteColor,
    pub hex: String,
    /// Ringed in the toolbar: the active color while not erasing.
    pub highlighted: bool,
    /// White needs a visible border against the white toolbar.
    pub bordered: bool,
}

pub struct PaletteControl;

impl PaletteControl {
    /// All fifteen swatches in toolbar order, highlighted against `brush`.
    pub fn swatches(brush: &Brush) -> Vec<Swatch> {
        PaletteColor::ALL
            .into_iter()
            .map(|color| Swatch {
                color,
                hex: color.color().to_hex(),
                highlighted: color == brush.color && !brush.eraser,
                bordered: color == PaletteColor::White,
            })
            .collect()
    }
}
