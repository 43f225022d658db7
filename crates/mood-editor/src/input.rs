//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus events into a unified `InputEvent`
//! enum consumed by the brush tool.

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A normalized input event from any pointing device or keyboard.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown {
        x: f32,
        y: f32,
        /// Pressure from 0.0 (none) to 1.0 (max). Mouse is always 1.0.
        pressure: f32,
    },

    /// Pointer moved (mouse move, touch move, pen move).
    PointerMove { x: f32, y: f32, pressure: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Keyboard key pressed.
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    /// Create a PointerDown from a web PointerEvent.
    pub fn from_pointer_down(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerDown { x, y, pressure }
    }

    pub fn from_pointer_move(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerMove { x, y, pressure }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            Self::Key { .. } => None,
        }
    }
}
