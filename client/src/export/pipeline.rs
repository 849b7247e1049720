//! Export pipeline orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads live layout metrics from the mounted board region, then hands a
//! snapshot plus a raster request to the retry policy in `board::export`,
//! injecting the browser rasterizer. The policy layer owns the
//! fonts-disabled retry; this module owns region resolution, the download,
//! and translating terminal failures into one human-readable message.
//!
//! `BoardState` is never modified here: a failed export needs no cleanup and
//! can simply be retried.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use board::export::{ExportError, RasterRequest};
use board::model::BoardSnapshot;

#[cfg(feature = "hydrate")]
use board::export::{ExportOutcome, rasterize_with_font_fallback, scale_factor};

/// DOM id of the capture region rendered by the board view.
pub const BOARD_REGION_ID: &str = "board-capture-area";

/// Single user-facing message for any terminal export failure.
pub const EXPORT_ALERT: &str =
    "تعذر تحميل الصورة بدقة عالية. قد يكون ذلك بسبب قيود الأمان في المتصفح أو تداخل الأنماط الخارجية.";

/// Build the first-attempt raster request for a snapshot: full font
/// fidelity, background filled with the kind's canonical surface color.
#[must_use]
pub fn raster_request_for(snapshot: &BoardSnapshot, scale: f64) -> RasterRequest {
    RasterRequest {
        scale,
        background: snapshot.kind.surface_color().to_owned(),
        skip_fonts: false,
    }
}

/// Log and describe a terminal export failure. Region errors are no-ops from
/// the user's point of view (nothing was exported, nothing to clean up);
/// everything else surfaces [`EXPORT_ALERT`].
#[must_use]
pub fn terminal_message(err: &ExportError) -> &'static str {
    match err {
        ExportError::RegionUnavailable | ExportError::EmptyRegion => "",
        ExportError::Raster(_) | ExportError::Download(_) => EXPORT_ALERT,
    }
}

/// Capture the mounted board region as a 4K PNG and trigger its download.
///
/// # Errors
///
/// Returns the terminal [`ExportError`] after at most two rasterization
/// attempts (the second with font processing disabled).
#[cfg(feature = "hydrate")]
pub async fn export_board(snapshot: BoardSnapshot) -> Result<ExportOutcome, ExportError> {
    use wasm_bindgen::JsCast;

    let region = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOARD_REGION_ID))
        .ok_or(ExportError::RegionUnavailable)?;
    let region: web_sys::HtmlElement = region
        .dyn_into()
        .map_err(|_| ExportError::RegionUnavailable)?;

    // Live layout metrics, not the requested dimensions: the export is a
    // scaled replica of exactly what is on screen (viewport caps included).
    let current_width = f64::from(region.offset_width());
    let current_height = f64::from(region.offset_height());
    let scale = scale_factor(current_width)?;

    let snapshot = BoardSnapshot { width_px: current_width, height_px: current_height, ..snapshot };
    let request = raster_request_for(&snapshot, scale);

    let outcome =
        rasterize_with_font_fallback(|req| crate::export::raster::rasterize(snapshot.clone(), req), request)
            .await?;
    if outcome.fonts_degraded {
        log::warn!("export: external font processing failed; fell back to platform fonts");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stamp = js_sys::Date::now() as u64;
    crate::export::download::trigger_png_download(
        &board::export::export_file_name(stamp),
        &outcome.image.data_url,
    )?;
    Ok(outcome)
}
