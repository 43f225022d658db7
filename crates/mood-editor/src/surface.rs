//! The drawing surface: an interactive freehand raster canvas.
//!
//! The surface owns two rasters of the same drawing, one at on-screen
//! resolution and one at the export scale. Every stroke segment is
//! committed to both, so a save can encode the high-resolution copy
//! without any retained vector data.
//!
//! ## States
//!
//! | From | Event | To |
//! |------|-------|----|
//! | Ready | pointer down | Drawing |
//! | Drawing | pointer up | Ready |
//! | Ready / Drawing | clear, save | Ready (content reset) |
//! | any | dispose | Disposed (terminal) |

use crate::controls::WidthControl;
use crate::input::InputEvent;
use crate::notify::{Notice, Notifier, messages};
use crate::shortcuts::ShortcutAction;
use crate::tools::{BrushTool, Ink, StrokeCommand, Tool, ToolKind};
use mood_core::{Brush, BrushWidth, CanvasSize, Container, PaletteColor, SurfaceConfig, SurfaceError};
use mood_render::{ExportPayload, Raster, encode_png};

/// Receives each exported artwork. An `Err` is the receiver's own failure
/// (e.g. persistence); it is logged and never undoes the clear.
pub type OnSave = Box<dyn FnMut(ExportPayload) -> Result<(), String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Ready,
    Drawing,
    Disposed,
}

struct Buffers {
    screen: Raster,
    export: Raster,
}

impl Buffers {
    fn commit(&mut self, cmd: &StrokeCommand) {
        match cmd {
            StrokeCommand::Segment { line, ink } => {
                self.screen.stroke_segment(*line, ink.color, ink.width);
                self.export.stroke_segment(*line, ink.color, ink.width);
            }
            StrokeCommand::Dot { at, ink } => {
                self.screen.dot(*at, ink.color, ink.width);
                self.export.dot(*at, ink.color, ink.width);
            }
        }
    }

    fn clear(&mut self) {
        self.screen.clear();
        self.export.clear();
    }
}

pub struct DrawingSurface {
    config: SurfaceConfig,
    size: CanvasSize,
    /// `None` once disposed.
    buffers: Option<Buffers>,
    brush: Brush,
    tool: BrushTool,
    on_save: OnSave,
    notifier: Box<dyn Notifier>,
}

impl DrawingSurface {
    /// Mount with the default configuration.
    pub fn mount(
        container: Container,
        on_save: OnSave,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, SurfaceError> {
        Self::mount_with(SurfaceConfig::default(), container, on_save, notifier)
    }

    /// Size the canvas from `container`, allocate both rasters filled with
    /// the background, and select the configured brush.
    pub fn mount_with(
        config: SurfaceConfig,
        container: Container,
        on_save: OnSave,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, SurfaceError> {
        let size = CanvasSize::fit(container, &config).inspect_err(|e| log::error!("{e}"))?;
        let screen = Raster::new(size, 1, config.background)?;
        let export = Raster::new(size, config.export_scale, config.background)?;
        log::info!("drawing surface mounted at {}x{}", size.width, size.height);

        notifier.notify(Notice::success(messages::READY));

        Ok(Self {
            brush: config.brush,
            config,
            size,
            buffers: Some(Buffers { screen, export }),
            tool: BrushTool::new(),
            on_save,
            notifier,
        })
    }

    pub fn state(&self) -> SurfaceState {
        if self.buffers.is_none() {
            SurfaceState::Disposed
        } else if self.tool.is_drawing() {
            SurfaceState::Drawing
        } else {
            SurfaceState::Ready
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn tool_kind(&self) -> ToolKind {
        ToolKind::of(&self.brush)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// The on-screen raster.
    pub fn screen(&self) -> Result<&Raster, SurfaceError> {
        self.buffers().map(|b| &b.screen)
    }

    /// The raster a save would encode.
    pub fn export_raster(&self) -> Result<&Raster, SurfaceError> {
        self.buffers().map(|b| &b.export)
    }

    // ─── Tool selection ──────────────────────────────────────────────────

    pub fn select_color(&mut self, color: PaletteColor) -> Result<(), SurfaceError> {
        self.buffers()?;
        self.brush.select_color(color);
        log::debug!("color {}", color.name());
        Ok(())
    }

    /// Applies to the next stroke; the stroke in progress keeps its width.
    pub fn select_width(&mut self, width: BrushWidth) -> Result<(), SurfaceError> {
        self.buffers()?;
        self.brush.width = width;
        log::debug!("width {}", width.get());
        Ok(())
    }

    /// Flip eraser mode, returning whether the eraser is now active.
    pub fn toggle_eraser(&mut self) -> Result<bool, SurfaceError> {
        self.buffers()?;
        let eraser = self.brush.toggle_eraser();
        self.notifier.notify(Notice::info(if eraser {
            messages::ERASER_MODE
        } else {
            messages::BRUSH_MODE
        }));
        Ok(eraser)
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Feed one input event through the brush tool, committing whatever it
    /// produces. Returns `true` if any pixels changed.
    pub fn handle(&mut self, event: &InputEvent) -> Result<bool, SurfaceError> {
        let ink = Ink::from_brush(&self.brush, self.config.background);
        let buffers = self.buffers.as_mut().ok_or(SurfaceError::Disposed)?;
        let commands = self.tool.handle(event, ink);
        for cmd in &commands {
            buffers.commit(cmd);
        }
        if !commands.is_empty() {
            log::trace!("committed {} stroke command(s)", commands.len());
        }
        Ok(!commands.is_empty())
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<bool, SurfaceError> {
        self.handle(&InputEvent::from_pointer_down(x, y, 1.0))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<bool, SurfaceError> {
        self.handle(&InputEvent::from_pointer_move(x, y, 1.0))
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<bool, SurfaceError> {
        self.handle(&InputEvent::from_pointer_up(x, y))
    }

    // ─── Clear & save ────────────────────────────────────────────────────

    /// Reset the canvas to the background fill. Idempotent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.reset()?;
        self.notifier.notify(Notice::info(messages::CLEARED));
        Ok(())
    }

    /// Encode the current drawing without touching it.
    pub fn snapshot(&self) -> Result<ExportPayload, SurfaceError> {
        encode_png(self.export_raster()?)
    }

    /// Export the drawing, clear the canvas, and hand the payload to the
    /// save callback.
    ///
    /// The canvas is cleared before the callback runs, not after, so the
    /// reset holds even when the callback errors or panics. A consequence
    /// is that the "cleared" notice precedes whatever the callback
    /// announces. If encoding fails the canvas is left as it was and
    /// nothing is handed off.
    pub fn save(&mut self) -> Result<(), SurfaceError> {
        self.finish_stroke()?;
        let payload = self.snapshot()?;
        log::debug!("saving {}x{} artwork", payload.width(), payload.height());

        self.clear()?;
        if let Err(e) = (self.on_save)(payload) {
            log::warn!("save callback failed: {e}");
        }
        Ok(())
    }

    // ─── Shortcuts ───────────────────────────────────────────────────────

    /// Run a keyboard shortcut. Returns `true` if the canvas or brush
    /// changed.
    pub fn apply(&mut self, action: ShortcutAction) -> Result<bool, SurfaceError> {
        match action {
            ShortcutAction::Brush => {
                if self.brush.eraser {
                    self.toggle_eraser()?;
                    return Ok(true);
                }
                self.buffers()?;
                Ok(false)
            }
            ShortcutAction::ToggleEraser => self.toggle_eraser().map(|_| true),
            ShortcutAction::WidthDown | ShortcutAction::WidthUp => {
                let steps = if action == ShortcutAction::WidthUp { 1 } else { -1 };
                let before = self.brush.width;
                let width = WidthControl::new(before).nudge(steps);
                self.select_width(width)?;
                Ok(width != before)
            }
            ShortcutAction::SelectColor(color) => self.select_color(color).map(|_| true),
            ShortcutAction::Clear => self.clear().map(|_| true),
            ShortcutAction::Save => self.save().map(|_| true),
        }
    }

    // ─── Teardown ────────────────────────────────────────────────────────

    /// Release both rasters. Every later operation fails with
    /// `SurfaceError::Disposed`.
    pub fn dispose(&mut self) {
        if self.buffers.take().is_some() {
            self.tool.cancel();
            log::info!("drawing surface disposed");
        }
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    fn buffers(&self) -> Result<&Buffers, SurfaceError> {
        self.buffers.as_ref().ok_or(SurfaceError::Disposed)
    }

    fn reset(&mut self) -> Result<(), SurfaceError> {
        let buffers = self.buffers.as_mut().ok_or(SurfaceError::Disposed)?;
        self.tool.cancel();
        buffers.clear();
        Ok(())
    }

    /// Commit a stroke still in progress as if the pointer were released at
    /// its last sample.
    fn finish_stroke(&mut self) -> Result<(), SurfaceError> {
        let last = self
            .tool
            .session()
            .and_then(|s| s.points().last().copied());
        if let Some(p) = last {
            self.pointer_up(p.x as f32, p.y as f32)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NoticeLevel, NoticeLog};
    use mood_core::Color;
    use pretty_assertions::assert_eq;

    const CONTAINER: Container = Container {
        width: 232.0,
        viewport_height: 400.0,
    };

    fn surface() -> (DrawingSurface, NoticeLog) {
        let log = NoticeLog::new();
        let surface = DrawingSurface::mount(CONTAINER, Box::new(|_| Ok(())), Box::new(log.clone())).unwrap();
        (surface, log)
    }

    #[test]
    fn mount_sizes_and_announces() {
        let (surface, log) = surface();
        assert_eq!(surface.size(), CanvasSize { width: 200, height: 100 });
        assert_eq!(surface.state(), SurfaceState::Ready);
        assert_eq!(surface.brush(), Brush::default());
        assert!(surface.screen().unwrap().is_blank());
        assert_eq!(surface.export_raster().unwrap().width(), 400);
        assert_eq!(log.notices().len(), 1);
        assert_eq!(log.notices()[0].level, NoticeLevel::Success);
    }

    #[test]
    fn pointer_drag_moves_through_states() {
        let (mut surface, _) = surface();
        surface.pointer_down(10.0, 10.0).unwrap();
        assert_eq!(surface.state(), SurfaceState::Drawing);
        assert!(surface.pointer_move(50.0, 10.0).unwrap());
        surface.pointer_up(50.0, 10.0).unwrap();
        assert_eq!(surface.state(), SurfaceState::Ready);
        assert_eq!(
            surface.screen().unwrap().pixel(30, 10),
            Some(PaletteColor::HotPink.color())
        );
    }

    #[test]
    fn clear_during_drag_drops_the_stroke() {
        let (mut surface, _) = surface();
        surface.pointer_down(10.0, 10.0).unwrap();
        surface.pointer_move(60.0, 10.0).unwrap();
        surface.clear().unwrap();
        assert_eq!(surface.state(), SurfaceState::Ready);
        assert!(!surface.pointer_move(90.0, 10.0).unwrap());
        assert!(surface.screen().unwrap().is_blank());
    }

    #[test]
    fn toggle_eraser_notifies_each_mode() {
        let (mut surface, log) = surface();
        assert!(surface.toggle_eraser().unwrap());
        assert_eq!(surface.tool_kind(), ToolKind::Eraser);
        assert_eq!(log.last().map(|n| n.message), Some(messages::ERASER_MODE.to_string()));
        assert!(!surface.toggle_eraser().unwrap());
        assert_eq!(log.last().map(|n| n.message), Some(messages::BRUSH_MODE.to_string()));
    }

    #[test]
    fn shortcuts_drive_the_brush() {
        let (mut surface, _) = surface();
        assert!(surface.apply(ShortcutAction::WidthUp).unwrap());
        assert_eq!(surface.brush().width.get(), 9);
        assert!(surface.apply(ShortcutAction::SelectColor(PaletteColor::Khaki)).unwrap());
        assert_eq!(surface.brush().color, PaletteColor::Khaki);
        assert!(!surface.apply(ShortcutAction::Brush).unwrap());
        assert!(surface.apply(ShortcutAction::ToggleEraser).unwrap());
        assert!(surface.apply(ShortcutAction::Brush).unwrap());
        assert!(!surface.brush().eraser);

        surface.select_width(BrushWidth::new(BrushWidth::MAX).unwrap()).unwrap();
        assert!(!surface.apply(ShortcutAction::WidthUp).unwrap());
    }

    #[test]
    fn save_finishes_a_stroke_in_progress() {
        let saved = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = saved.clone();
        let mut surface = DrawingSurface::mount(
            CONTAINER,
            Box::new(move |p| {
                sink.borrow_mut().push(p);
                Ok(())
            }),
            Box::new(NoticeLog::new()),
        )
        .unwrap();

        surface.pointer_down(40.0, 40.0).unwrap();
        surface.save().unwrap();
        assert_eq!(surface.state(), SurfaceState::Ready);

        let payloads = saved.borrow();
        assert_eq!(payloads.len(), 1);
        let pixmap = mood_render::decode_png(payloads[0].as_str()).unwrap();
        let p = pixmap.pixel(80, 80).unwrap().demultiply();
        assert_eq!(
            Color::rgba(p.red(), p.green(), p.blue(), p.alpha()),
            PaletteColor::HotPink.color()
        );
    }

    #[test]
    fn save_clears_before_the_callback_runs() {
        let log = NoticeLog::new();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
        let (watch, sink) = (log.clone(), seen.clone());
        let mut surface = DrawingSurface::mount(
            CONTAINER,
            Box::new(move |_| {
                *sink.borrow_mut() = watch.last().map(|n| n.message);
                Ok(())
            }),
            Box::new(log.clone()),
        )
        .unwrap();

        surface.pointer_down(20.0, 20.0).unwrap();
        surface.pointer_up(20.0, 20.0).unwrap();
        surface.save().unwrap();
        assert_eq!(*seen.borrow(), Some(messages::CLEARED.to_string()));
    }

    #[test]
    fn disposed_surface_rejects_everything() {
        let (mut surface, _) = surface();
        surface.dispose();
        assert_eq!(surface.state(), SurfaceState::Disposed);
        assert_eq!(surface.clear(), Err(SurfaceError::Disposed));
        assert_eq!(surface.save(), Err(SurfaceError::Disposed));
        assert_eq!(surface.pointer_down(1.0, 1.0), Err(SurfaceError::Disposed));
        assert_eq!(surface.toggle_eraser(), Err(SurfaceError::Disposed));
        assert_eq!(surface.select_color(PaletteColor::Mint), Err(SurfaceError::Disposed));
        assert!(surface.screen().is_err());
        // Disposing twice is harmless.
        surface.dispose();
    }
}
