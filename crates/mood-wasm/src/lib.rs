//! WASM bridge for Mood Draw: exposes the drawing surface to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and mounted by the drawing
//! page. The page forwards pointer, toolbar and keyboard events here and
//! calls `render` whenever a handler reports a change.

mod render2d;

use mood_core::{BrushWidth, Container, PaletteColor, SurfaceConfig};
use mood_editor::DrawingSurface;
use mood_editor::controls::{PaletteControl, WidthControl};
use mood_editor::input::Modifiers;
use mood_editor::notify::{Notice, NoticeLevel, Notifier};
use mood_editor::shortcuts::ShortcutMap;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

const INIT_FAILED_MESSAGE: &str = "Drawing canvas failed to initialize";
const DISPOSED_MESSAGE: &str = "Drawing canvas closed";

/// The main WASM-facing canvas controller.
///
/// Holds the mounted surface and the width slider state. If mounting
/// failed, or after `dispose`, the controller is inert: every handler
/// returns `false` and `render` draws a placeholder saying which.
#[wasm_bindgen]
pub struct MoodCanvas {
    surface: Option<DrawingSurface>,
    width_control: WidthControl,
    init_error: Option<String>,
    /// Fallback size for the placeholder when no surface exists.
    container_width: f64,
    viewport_height: f64,
}

#[wasm_bindgen]
impl MoodCanvas {
    /// Mount a surface sized from the container.
    ///
    /// `on_save` receives each exported image as a `data:` URL string.
    /// `notify`, if given, is called as `notify(level, message)` with
    /// `level` one of `"success"`, `"error"`, `"info"`; otherwise notices
    /// go to the browser console.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_width: f64,
        viewport_height: f64,
        on_save: js_sys::Function,
        notify: Option<js_sys::Function>,
    ) -> Self {
        console_error_panic_hook_setup();

        let container = Container {
            width: container_width as f32,
            viewport_height: viewport_height as f32,
        };
        let on_save = Box::new(move |payload: mood_render::ExportPayload| {
            on_save
                .call1(&JsValue::NULL, &JsValue::from_str(payload.as_str()))
                .map(|_| ())
                .map_err(|e| format!("{e:?}"))
        });
        let notifier = Box::new(JsNotifier { callback: notify });

        let (surface, init_error) = match DrawingSurface::mount(container, on_save, notifier) {
            Ok(surface) => (Some(surface), None),
            Err(e) => {
                web_sys::console::error_1(&e.to_string().into());
                (None, Some(e.to_string()))
            }
        };

        Self {
            width_control: WidthControl::new(
                surface
                    .as_ref()
                    .map(|s| s.brush().width)
                    .unwrap_or_default(),
            ),
            surface,
            init_error,
            container_width,
            viewport_height,
        }
    }

    /// Whether the surface mounted and accepts input.
    pub fn is_ready(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.screen().is_ok())
    }

    /// Initialization error message, or empty string.
    pub fn init_error(&self) -> String {
        self.init_error.clone().unwrap_or_default()
    }

    /// Canvas width in pixels (0 when inert).
    pub fn width(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.size().width)
    }

    /// Canvas height in pixels (0 when inert).
    pub fn height(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.size().height)
    }

    /// Present the current drawing on a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        match self.surface.as_ref().map(|s| s.screen()) {
            Some(Ok(raster)) => {
                if let Err(e) = render2d::blit(ctx, raster) {
                    web_sys::console::error_2(&"Mood Draw blit failed".into(), &e);
                }
            }
            _ => {
                let (width, height) = placeholder_size(
                    self.container_width,
                    self.viewport_height,
                    &SurfaceConfig::default(),
                );
                render2d::render_placeholder(
                    ctx,
                    width,
                    height,
                    placeholder_message(self.init_error.is_some()),
                    &render2d::PlaceholderTheme::light(),
                )
            }
        }
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Handle pointer down event. Returns true if the canvas changed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.with_surface(|s| s.pointer_down(x, y))
    }

    /// Handle pointer move event. Returns true if the canvas changed.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.with_surface(|s| s.pointer_move(x, y))
    }

    /// Handle pointer up event. Returns true if the canvas changed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.with_surface(|s| s.pointer_up(x, y))
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    /// Select a palette swatch by hex value. Colors outside the palette are
    /// rejected.
    pub fn select_color(&mut self, hex: &str) -> bool {
        let Some(color) = PaletteColor::from_hex(hex) else {
            return false;
        };
        self.with_surface(|s| s.select_color(color).map(|_| true))
    }

    /// Move the width slider. Values outside `[2, 50]` are rejected.
    pub fn select_width(&mut self, width: u32) -> bool {
        if self.surface.is_none() {
            return false;
        }
        let Some(width) = self.width_control.set(width) else {
            return false;
        };
        self.with_surface(|s| s.select_width(width).map(|_| true))
    }

    /// Toggle eraser mode. Returns the new eraser state.
    pub fn toggle_eraser(&mut self) -> bool {
        self.with_surface(|s| s.toggle_eraser())
    }

    /// Clear the canvas. Returns true on success.
    pub fn clear(&mut self) -> bool {
        self.with_surface(|s| s.clear().map(|_| true))
    }

    /// Export, hand the image to `on_save`, and clear. Returns true if an
    /// image was produced.
    pub fn save(&mut self) -> bool {
        self.with_surface(|s| s.save().map(|_| true))
    }

    /// Palette swatches as JSON:
    /// `[{"hex":"#FFB6C1","name":"Light pink","active":false,"bordered":false}, ...]`
    pub fn palette_json(&self) -> String {
        let brush = self.surface.as_ref().map(|s| s.brush()).unwrap_or_default();
        let swatches: Vec<serde_json::Value> = PaletteControl::swatches(&brush)
            .into_iter()
            .map(|s| {
                serde_json::json!({
                    "hex": s.hex,
                    "name": s.color.name(),
                    "active": s.highlighted,
                    "bordered": s.bordered,
                })
            })
            .collect();
        serde_json::to_string(&swatches).unwrap_or_else(|_| "[]".to_string())
    }

    /// Current brush as JSON: `{"color":"#FF69B4","width":8,"eraser":false,
    /// "min":2,"max":50}`.
    pub fn brush_json(&self) -> String {
        let brush = self.surface.as_ref().map(|s| s.brush()).unwrap_or_default();
        serde_json::json!({
            "color": brush.color.color().to_hex(),
            "width": brush.width.get(),
            "eraser": brush.eraser,
            "min": BrushWidth::MIN,
            "max": BrushWidth::MAX,
        })
        .to_string()
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let Some(action) = ShortcutMap::resolve(key, mods) else {
            return r#"{"changed":false,"action":"none"}"#.to_string();
        };
        let changed = self.with_surface(|s| s.apply(action));
        if let Some(surface) = &self.surface {
            self.width_control = WidthControl::new(surface.brush().width);
        }
        let c = if changed { "true" } else { "false" };
        format!(r#"{{"changed":{c},"action":"{}"}}"#, action.name())
    }

    // ─── Teardown ────────────────────────────────────────────────────────

    /// Release the surface's rasters. The controller is inert afterwards.
    pub fn dispose(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.dispose();
        }
        self.surface = None;
    }
}

impl MoodCanvas {
    /// Run `op` against the surface, logging failures. Inert controllers
    /// and errors both report `false`.
    fn with_surface(
        &mut self,
        op: impl FnOnce(&mut DrawingSurface) -> Result<bool, mood_core::SurfaceError>,
    ) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        match op(surface) {
            Ok(changed) => changed,
            Err(e) => {
                log::error!("{e}");
                web_sys::console::error_1(&e.to_string().into());
                false
            }
        }
    }
}

/// Forwards notices to a JS callback, or to the console without one.
struct JsNotifier {
    callback: Option<js_sys::Function>,
}

impl Notifier for JsNotifier {
    fn notify(&self, notice: Notice) {
        let level = match notice.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        };
        match &self.callback {
            Some(f) => {
                if let Err(e) = f.call2(
                    &JsValue::NULL,
                    &JsValue::from_str(level),
                    &JsValue::from_str(&notice.message),
                ) {
                    web_sys::console::error_2(&"Mood Draw notify failed".into(), &e);
                }
            }
            None => web_sys::console::log_2(&level.into(), &notice.message.into()),
        }
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mood Draw WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone helpers (no canvas needed) ───────────────────────────────

/// Area the placeholder card covers: the canvas size the container would
/// get, not bounded below.
fn placeholder_size(container_width: f64, viewport_height: f64, config: &SurfaceConfig) -> (f64, f64) {
    let width = (container_width - f64::from(config.padding)).clamp(0.0, f64::from(config.max_width));
    let height =
        (viewport_height - f64::from(config.chrome_height)).clamp(0.0, f64::from(config.max_height));
    (width, height)
}

fn placeholder_message(init_failed: bool) -> &'static str {
    if init_failed {
        INIT_FAILED_MESSAGE
    } else {
        DISPOSED_MESSAGE
    }
}

/// Canvas size a container would get, as JSON:
/// `{"ok":true,"width":748,"height":180}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn fit_canvas(container_width: f64, viewport_height: f64) -> String {
    let container = Container {
        width: container_width as f32,
        viewport_height: viewport_height as f32,
    };
    match mood_core::CanvasSize::fit(container, &SurfaceConfig::default()) {
        Ok(size) => serde_json::json!({
            "ok": true,
            "width": size.width,
            "height": size.height,
        })
        .to_string(),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }).to_string(),
    }
}
