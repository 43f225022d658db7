//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives
//! in Rust so the browser bridge and any native host share it.

use crate::input::Modifiers;
use mood_core::PaletteColor;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Leave eraser mode, keeping the current color.
    Brush,
    ToggleEraser,
    WidthDown,
    WidthUp,
    SelectColor(PaletteColor),
    Clear,
    Save,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Brush => "brush",
            ShortcutAction::ToggleEraser => "toggle_eraser",
            ShortcutAction::WidthDown => "width_down",
            ShortcutAction::WidthUp => "width_up",
            ShortcutAction::SelectColor(_) => "select_color",
            ShortcutAction::Clear => "clear",
            ShortcutAction::Save => "save",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// `ctrl` and `meta` are interchangeable so ⌘ on macOS and Ctrl elsewhere
/// behave the same.
pub struct ShortcutMap;

impl ShortcutMap {
    /// `key` is the `KeyboardEvent.key` value (e.g. `"e"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.ctrl || modifiers.meta;

        if cmd {
            return match key {
                "s" | "S" => Some(ShortcutAction::Save),
                "Delete" | "Backspace" => Some(ShortcutAction::Clear),
                _ => None,
            };
        }

        if modifiers.alt {
            return None;
        }

        match key {
            "b" | "B" => Some(ShortcutAction::Brush),
            "e" | "E" => Some(ShortcutAction::ToggleEraser),
            "[" => Some(ShortcutAction::WidthDown),
            "]" => Some(ShortcutAction::WidthUp),
            "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => key
                .parse::<usize>()
                .ok()
                .and_then(|n| PaletteColor::from_index(n - 1))
                .map(ShortcutAction::SelectColor),
            _ => None,
        }
    }
}
