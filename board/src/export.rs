//! Export policy: scale math, output sizing, file naming, and the
//! rasterize-with-font-fallback retry.
//!
//! ERROR HANDLING
//! ==============
//! The rasterizer itself is injected as an async function so the retry policy
//! can be exercised with a deterministically failing fake. Attempt errors are
//! plain strings from the platform boundary; this module wraps the terminal
//! one in [`ExportError`].

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::future::Future;

use crate::consts::{EXPORT_FILE_PREFIX, EXPORT_TARGET_WIDTH_PX};

/// Terminal export failures surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The board region is not mounted yet; the export is a no-op.
    #[error("board region is not mounted")]
    RegionUnavailable,
    /// The mounted region has no measurable width, so no scale exists.
    #[error("board region has no measurable width")]
    EmptyRegion,
    /// Both rasterization attempts failed; carries the second error.
    #[error("rasterization failed after font fallback: {0}")]
    Raster(String),
    /// The image was produced but the download could not be triggered.
    #[error("download failed: {0}")]
    Download(String),
}

/// Everything one rasterization attempt needs besides the snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterRequest {
    /// Uniform scale applied to both axes so the output is a scaled replica
    /// of the on-screen layout, never a re-flow.
    pub scale: f64,
    /// Opaque background fill behind all content.
    pub background: String,
    /// Skip external font processing and fall back to the platform face.
    pub skip_fonts: bool,
}

impl RasterRequest {
    /// The degraded retry variant of this request.
    #[must_use]
    pub fn without_fonts(&self) -> Self {
        Self { skip_fonts: true, ..self.clone() }
    }
}

/// A finished raster: PNG data URL plus pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Successful export result, noting whether the fonts-disabled path ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOutcome {
    pub image: RasterImage,
    pub fonts_degraded: bool,
}

/// Uniform scale that maps the live region width onto the 4K target width.
///
/// # Errors
///
/// Returns [`ExportError::EmptyRegion`] for non-positive or non-finite widths.
pub fn scale_factor(current_width_px: f64) -> Result<f64, ExportError> {
    if !(current_width_px.is_finite() && current_width_px > 0.0) {
        return Err(ExportError::EmptyRegion);
    }
    Ok(EXPORT_TARGET_WIDTH_PX / current_width_px)
}

/// Output canvas dimensions for a live region. The width always equals the
/// target width exactly, modulo rounding.
///
/// # Errors
///
/// Returns [`ExportError::EmptyRegion`] when no scale exists for the region.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn output_size(width_px: f64, height_px: f64) -> Result<(u32, u32), ExportError> {
    let scale = scale_factor(width_px)?;
    let out_w = (width_px * scale).round().max(1.0) as u32;
    let out_h = (height_px * scale).round().max(1.0) as u32;
    Ok((out_w, out_h))
}

/// File name for an export triggered at `unix_millis`. The timestamp keeps
/// repeated exports in one session from colliding.
#[must_use]
pub fn export_file_name(unix_millis: u64) -> String {
    format!("{EXPORT_FILE_PREFIX}-{unix_millis}.png")
}

/// Run `attempt` with full font fidelity, retrying exactly once with font
/// processing disabled if the first attempt fails. The dominant real-world
/// cause of a first failure is a cross-origin restriction on externally
/// hosted faces; the retry trades fidelity for a usable image.
///
/// A request that already skips fonts gets a single attempt and no retry.
///
/// # Errors
///
/// Returns [`ExportError::Raster`] carrying the final attempt's error.
pub async fn rasterize_with_font_fallback<F, Fut>(
    mut attempt: F,
    request: RasterRequest,
) -> Result<ExportOutcome, ExportError>
where
    F: FnMut(RasterRequest) -> Fut,
    Fut: Future<Output = Result<RasterImage, String>>,
{
    match attempt(request.clone()).await {
        Ok(image) => Ok(ExportOutcome { image, fonts_degraded: request.skip_fonts }),
        Err(_) if !request.skip_fonts => attempt(request.without_fonts())
            .await
            .map(|image| ExportOutcome { image, fonts_degraded: true })
            .map_err(ExportError::Raster),
        Err(only) => Err(ExportError::Raster(only)),
    }
}
