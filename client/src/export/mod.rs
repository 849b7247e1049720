//! High-resolution export: pipeline orchestration, the browser rasterizer,
//! and the download trigger.

pub mod download;
pub mod pipeline;
pub mod raster;
