//! Raster buffer → committed stroke pixels.
//!
//! A `Raster` owns one `tiny_skia::Pixmap` and paints brush segments into
//! it. There is no retained vector model: once a segment is painted it is
//! just pixels.

use kurbo::{Line, Point};
use mood_core::{CanvasSize, Color, SurfaceError};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A mutable pixel grid filled with a solid background.
///
/// Drawing coordinates are always on-screen canvas pixels; `scale` maps
/// them onto this raster, so the same segment can be committed to the
/// screen raster (scale 1) and the export raster (scale 2).
pub struct Raster {
    pixmap: Pixmap,
    scale: f32,
    background: Color,
}

impl Raster {
    /// Allocate a raster of `size` pixels at `scale` and fill it with
    /// `background`. Allocation failure is an initialization error.
    pub fn new(size: CanvasSize, scale: u32, background: Color) -> Result<Self, SurfaceError> {
        let px = size.scaled(scale);
        let mut pixmap = Pixmap::new(px.width, px.height).ok_or_else(|| {
            SurfaceError::Init(format!("cannot allocate {}x{} raster", px.width, px.height))
        })?;
        pixmap.fill(to_skia(background));
        log::debug!("raster {}x{} (scale {scale})", px.width, px.height);

        Ok(Self {
            pixmap,
            scale: scale as f32,
            background,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Reset every pixel to the background fill.
    pub fn clear(&mut self) {
        self.pixmap.fill(to_skia(self.background));
    }

    /// Paint one straight segment with round caps and joins.
    ///
    /// Consecutive segments of a drag overlap in their round caps, which
    /// is what keeps a freehand stroke continuous at direction changes.
    pub fn stroke_segment(&mut self, segment: Line, color: Color, width: f32) {
        if segment.p0 == segment.p1 {
            self.dot(segment.p0, color, width);
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(segment.p0.x as f32, segment.p0.y as f32);
        pb.line_to(segment.p1.x as f32, segment.p1.y as f32);
        let Some(path) = pb.finish() else {
            log::trace!("skipping degenerate segment {segment:?}");
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, self.transform(), None);
    }

    /// Paint a filled circle of diameter `width` (a press without a drag).
    pub fn dot(&mut self, center: Point, color: Color, width: f32) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, width / 2.0) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            self.transform(),
            None,
        );
    }

    /// Read back one pixel in raster coordinates (un-premultiplied).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// True when every pixel equals the background fill.
    pub fn is_blank(&self) -> bool {
        let bg = to_skia(self.background).premultiply().to_color_u8();
        self.pixmap.pixels().iter().all(|p| *p == bg)
    }

    /// Straight (non-premultiplied) RGBA bytes, row-major.
    ///
    /// This is the layout browser `ImageData` expects.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn to_skia(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn solid(c: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(c.r, c.g, c.b, c.a);
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::PaletteColor;
    use pretty_assertions::assert_eq;

    const SIZE: CanvasSize = CanvasSize {
        width: 120,
        height: 40,
    };

    #[test]
    fn starts_blank() {
        let raster = Raster::new(SIZE, 1, Color::WHITE).unwrap();
        assert!(raster.is_blank());
        assert_eq!(raster.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(raster.pixel(120, 0), None);
    }

    #[test]
    fn horizontal_segment_paints_its_center() {
        let mut raster = Raster::new(SIZE, 1, Color::WHITE).unwrap();
        let pink = PaletteColor::HotPink.color();
        raster.stroke_segment(Line::new((10.0, 10.0), (100.0, 10.0)), pink, 8.0);

        assert!(!raster.is_blank());
        assert_eq!(raster.pixel(55, 10), Some(pink));
        // Round cap reaches past the end point.
        assert_eq!(raster.pixel(102, 10), Some(pink));
        assert_eq!(raster.pixel(55, 30), Some(Color::WHITE));
    }

    #[test]
    fn scaled_raster_doubles_coordinates() {
        let mut raster = Raster::new(SIZE, 2, Color::WHITE).unwrap();
        assert_eq!((raster.width(), raster.height()), (240, 80));
        let mint = PaletteColor::Mint.color();
        raster.stroke_segment(Line::new((10.0, 10.0), (100.0, 10.0)), mint, 8.0);
        assert_eq!(raster.pixel(110, 20), Some(mint));
        assert_eq!(raster.pixel(110, 60), Some(Color::WHITE));
    }

    #[test]
    fn zero_length_segment_is_a_dot() {
        let mut raster = Raster::new(SIZE, 1, Color::WHITE).unwrap();
        let plum = PaletteColor::Plum.color();
        raster.stroke_segment(Line::new((20.0, 20.0), (20.0, 20.0)), plum, 10.0);
        assert_eq!(raster.pixel(20, 20), Some(plum));
        assert_eq!(raster.pixel(40, 20), Some(Color::WHITE));
    }

    #[test]
    fn clear_restores_background() {
        let mut raster = Raster::new(SIZE, 1, Color::WHITE).unwrap();
        raster.dot(Point::new(30.0, 20.0), PaletteColor::DarkGray.color(), 12.0);
        assert!(!raster.is_blank());
        raster.clear();
        assert!(raster.is_blank());
    }

    #[test]
    fn rgba_bytes_match_dimensions() {
        let raster = Raster::new(SIZE, 1, Color::WHITE).unwrap();
        let bytes = raster.to_rgba();
        assert_eq!(bytes.len(), 120 * 40 * 4);
        assert!(bytes.iter().all(|b| *b == 255));
    }
}
