//! Board rendering and export engine.
//!
//! ARCHITECTURE
//! ============
//! Everything except [`render`] is pure, platform-independent data and logic:
//! the board model, the scene draw list, text wrapping, and the export
//! scale/retry policy. `render` is the single module that touches
//! `web_sys::CanvasRenderingContext2d` and turns a scene into pixels.

pub mod color;
pub mod consts;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;
pub mod scene;
