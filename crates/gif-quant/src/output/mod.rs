//! Output types for the quantization pipeline.
//!
//! [`IndexedRaster`] is the hand-off between rasterization and the GIF
//! stream writer, and the value [`quantize()`](crate::quantize) returns for
//! callers that want the palette and indices without the container.

mod indexed_raster;

pub use indexed_raster::IndexedRaster;
