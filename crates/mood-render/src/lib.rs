pub mod export;
pub mod raster;

pub use export::{ExportFormat, ExportPayload, decode_png, encode_png};
pub use raster::Raster;
