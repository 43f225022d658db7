//! Raster → encoded still image.
//!
//! The export payload is a `data:` URL so it can be stored as a plain
//! string and used directly as an `<img src>`.

use crate::raster::Raster;
use mood_core::SurfaceError;
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Image formats the surface can export to. PNG is lossless, so the
/// export is always at full quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
        }
    }
}

/// One encoded snapshot of a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    data_url: String,
    width: u32,
    height: u32,
}

impl ExportPayload {
    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    pub fn into_string(self) -> String {
        self.data_url
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }
}

impl AsRef<str> for ExportPayload {
    fn as_ref(&self) -> &str {
        &self.data_url
    }
}

/// Encode the raster's current pixels as a PNG data URL.
pub fn encode_png(raster: &Raster) -> Result<ExportPayload, SurfaceError> {
    let bytes = raster
        .pixmap()
        .encode_png()
        .map_err(|e| SurfaceError::Export(e.to_string()))?;
    log::debug!(
        "encoded {}x{} png ({} bytes)",
        raster.width(),
        raster.height(),
        bytes.len()
    );

    let mut data_url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    data_url.push_str(PNG_DATA_URL_PREFIX);
    data_url.push_str(&base64::encode(&bytes));

    Ok(ExportPayload {
        data_url,
        width: raster.width(),
        height: raster.height(),
    })
}

/// Decode a PNG data URL back to pixels.
///
/// Used when a stored artwork has to be inspected again, since the
/// surface itself keeps nothing after a save.
pub fn decode_png(data_url: &str) -> Result<Pixmap, String> {
    let encoded = data_url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| "not a PNG data URL".to_string())?;
    let bytes = base64::decode(encoded).map_err(|e| e.to_string())?;
    Pixmap::decode_png(&bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Line;
    use mood_core::{CanvasSize, Color, PaletteColor};
    use pretty_assertions::assert_eq;

    fn raster() -> Raster {
        Raster::new(
            CanvasSize {
                width: 64,
                height: 32,
            },
            2,
            Color::WHITE,
        )
        .unwrap()
    }

    #[test]
    fn payload_is_png_data_url() {
        let payload = encode_png(&raster()).unwrap();
        assert!(payload.as_str().starts_with("data:image/png;base64,"));
        assert_eq!((payload.width(), payload.height()), (128, 64));
        assert_eq!(payload.format().mime_type(), "image/png");
    }

    #[test]
    fn decoded_pixels_match_raster() {
        let mut r = raster();
        let coral = PaletteColor::CoralRed.color();
        r.stroke_segment(Line::new((4.0, 16.0), (60.0, 16.0)), coral, 6.0);

        let pixmap = decode_png(encode_png(&r).unwrap().as_str()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (128, 64));
        let p = pixmap.pixel(64, 32).unwrap().demultiply();
        assert_eq!(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()), coral);
    }

    #[test]
    fn identical_rasters_encode_identically() {
        assert_eq!(encode_png(&raster()).unwrap(), encode_png(&raster()).unwrap());
    }

    #[test]
    fn rejects_foreign_data_urls() {
        assert!(decode_png("data:image/jpeg;base64,AAAA").is_err());
        assert!(decode_png("data:image/png;base64,***").is_err());
    }
}
