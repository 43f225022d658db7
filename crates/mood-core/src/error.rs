use std::fmt;

/// Failures of the drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No backing raster could be acquired; the surface is unusable.
    Init(String),
    /// Encoding the raster to an image payload failed.
    Export(String),
    /// The surface was disposed and no longer owns a raster.
    Disposed,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Init(msg) => write!(f, "drawing canvas failed to initialize: {msg}"),
            SurfaceError::Export(msg) => write!(f, "could not export drawing: {msg}"),
            SurfaceError::Disposed => f.write_str("drawing canvas has been disposed"),
        }
    }
}

impl std::error::Error for SurfaceError {}
