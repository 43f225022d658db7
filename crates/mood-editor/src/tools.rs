//! Freehand brush tool.
//!
//! Translates pointer input into `StrokeCommand`s that the surface commits
//! to its rasters. A stroke is captured as a chain of straight segments
//! between consecutive pointer samples; each segment is committed as soon
//! as it is known, so nothing but pixels survives the stroke.

use crate::input::InputEvent;
use kurbo::{Line, Point};
use mood_core::{Brush, Color};
use smallvec::SmallVec;

/// Whether strokes paint a palette color or the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    Eraser,
}

impl ToolKind {
    pub fn of(brush: &Brush) -> Self {
        if brush.eraser {
            ToolKind::Eraser
        } else {
            ToolKind::Brush
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
        }
    }
}

/// Resolved paint parameters for one stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub color: Color,
    pub width: f32,
    pub eraser: bool,
}

impl Ink {
    pub fn from_brush(brush: &Brush, background: Color) -> Self {
        Self {
            color: brush.effective_color(background),
            width: brush.width.as_f32(),
            eraser: brush.eraser,
        }
    }
}

/// A piece of a stroke ready to be rasterized.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeCommand {
    Segment { line: Line, ink: Ink },
    /// A press released without moving.
    Dot { at: Point, ink: Ink },
}

/// The in-progress freehand path of one pointer drag.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    points: SmallVec<[Point; 32]>,
    ink: Ink,
}

impl StrokeSession {
    fn begin(at: Point, ink: Ink) -> Self {
        let mut points = SmallVec::new();
        points.push(at);
        Self { points, ink }
    }

    /// Append a sample, returning the segment it closes. Repeated samples
    /// at the same position produce nothing.
    fn extend(&mut self, to: Point) -> Option<Line> {
        let from = *self.points.last()?;
        if from == to {
            return None;
        }
        self.points.push(to);
        Some(Line::new(from, to))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn ink(&self) -> Ink {
        self.ink
    }
}

/// Trait for tools that handle input and produce stroke commands.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle an input event with the brush as it is right now, returning
    /// zero or more commands to rasterize.
    fn handle(&mut self, event: &InputEvent, ink: Ink) -> Vec<StrokeCommand>;

    /// True between pointer-down and pointer-up.
    fn is_drawing(&self) -> bool;

    /// Drop any in-progress stroke without committing more of it.
    fn cancel(&mut self);
}

// ─── Brush Tool ──────────────────────────────────────────────────────────

pub struct BrushTool {
    session: Option<StrokeSession>,
    kind: ToolKind,
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushTool {
    pub fn new() -> Self {
        Self {
            session: None,
            kind: ToolKind::Brush,
        }
    }

    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    /// Finalize the current stroke, committing a dot if it never moved.
    fn finish(&mut self, at: Option<Point>) -> Vec<StrokeCommand> {
        let Some(mut session) = self.session.take() else {
            return vec![];
        };
        let ink = session.ink;
        let mut out = Vec::new();
        if let Some(line) = at.and_then(|p| session.extend(p)) {
            out.push(StrokeCommand::Segment { line, ink });
        }
        if session.points.len() == 1 {
            out.push(StrokeCommand::Dot {
                at: session.points[0],
                ink,
            });
        }
        log::debug!(
            "{} stroke finished with {} samples",
            self.kind.name(),
            session.points.len()
        );
        out
    }
}

impl Tool for BrushTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle(&mut self, event: &InputEvent, ink: Ink) -> Vec<StrokeCommand> {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                // A second press without a release closes the stale stroke.
                let out = self.finish(None);
                self.kind = if ink.eraser {
                    ToolKind::Eraser
                } else {
                    ToolKind::Brush
                };
                self.session = Some(StrokeSession::begin(point(*x, *y), ink));
                out
            }
            InputEvent::PointerMove { x, y, .. } => {
                let Some(session) = self.session.as_mut() else {
                    return vec![];
                };
                match session.extend(point(*x, *y)) {
                    Some(line) => vec![StrokeCommand::Segment {
                        line,
                        ink: session.ink,
                    }],
                    None => vec![],
                }
            }
            InputEvent::PointerUp { x, y } => self.finish(Some(point(*x, *y))),
            InputEvent::Key { .. } => vec![],
        }
    }

    fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    fn cancel(&mut self) {
        self.session = None;
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}
