//! Canvas sizing at mount time.
//!
//! The drawing surface takes its pixel size once, from the space the page
//! gives it, and never resizes afterwards.

use crate::error::SurfaceError;
use crate::model::{Brush, Color};

/// The space available to the surface when it mounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Inner width of the element hosting the canvas.
    pub width: f32,
    /// Height of the browser viewport (or window).
    pub viewport_height: f32,
}

/// Fixed pixel dimensions of a mounted surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Fit a canvas into `container` under the limits in `config`.
    ///
    /// Width is `min(container.width - padding, max_width)`, height is
    /// `min(viewport_height - chrome_height, max_height)`. A result with no
    /// drawable pixels is an initialization failure.
    pub fn fit(container: Container, config: &SurfaceConfig) -> Result<Self, SurfaceError> {
        let width = (container.width - config.padding).min(config.max_width as f32);
        let height = (container.viewport_height - config.chrome_height).min(config.max_height as f32);

        if !(width >= 1.0 && height >= 1.0) {
            return Err(SurfaceError::Init(format!(
                "container {}x{} leaves no room for a canvas",
                container.width, container.viewport_height
            )));
        }

        Ok(Self {
            width: width.floor() as u32,
            height: height.floor() as u32,
        })
    }

    pub fn scaled(self, factor: u32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Drawing surface configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub max_width: u32,
    pub max_height: u32,
    /// Horizontal padding subtracted from the container width.
    pub padding: f32,
    /// Vertical space reserved for the page around the canvas.
    pub chrome_height: f32,
    /// Export resolution relative to the on-screen canvas.
    pub export_scale: u32,
    pub background: Color,
    /// Brush selected at mount.
    pub brush: Brush,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 500,
            padding: 32.0,
            chrome_height: 300.0,
            export_scale: 2,
            background: Color::WHITE,
            brush: Brush::default(),
        }
    }
}
