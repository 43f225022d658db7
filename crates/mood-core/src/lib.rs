pub mod error;
pub mod layout;
pub mod model;

pub use error::SurfaceError;
pub use layout::{CanvasSize, Container, SurfaceConfig};
pub use model::*;
