//! Canvas2D presentation.
//!
//! The surface already holds finished pixels, so presenting is a single
//! `putImageData` blit. When the surface never mounted, an inert
//! placeholder is drawn instead.

use mood_render::Raster;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

/// Colors for the placeholder card.
pub struct PlaceholderTheme {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl PlaceholderTheme {
    pub fn light() -> Self {
        Self {
            bg: "#FFF5F7",
            border: "#FFB6C1",
            text: "#86868B",
        }
    }
}

/// Copy the raster onto the context at the origin.
pub fn blit(ctx: &CanvasRenderingContext2d, raster: &Raster) -> Result<(), JsValue> {
    let rgba = raster.to_rgba();
    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(rgba.as_slice()),
        raster.width(),
        raster.height(),
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

/// Draw the "canvas unavailable" card in place of the drawing.
pub fn render_placeholder(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    message: &str,
    theme: &PlaceholderTheme,
) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(theme.border);
    ctx.set_line_width(2.0);
    let dash = js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.stroke_rect(1.0, 1.0, (width - 2.0).max(0.0), (height - 2.0).max(0.0));
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    ctx.set_fill_style_str(theme.text);
    ctx.set_font("14px system-ui, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(message, width / 2.0, height / 2.0);
}
