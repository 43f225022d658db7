pub mod controls;
pub mod input;
pub mod notify;
pub mod shortcuts;
pub mod surface;
pub mod tools;

pub use surface::{DrawingSurface, OnSave, SurfaceState};
