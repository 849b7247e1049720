use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

// =============================================================
// Scale math
// =============================================================

#[test]
fn scale_factor_maps_region_width_to_target() {
    let scale = scale_factor(600.0).expect("valid width");
    assert!((scale - 6.4).abs() < 1e-9);
}

#[test]
fn scale_factor_rejects_zero_negative_and_non_finite_widths() {
    assert!(matches!(scale_factor(0.0), Err(ExportError::EmptyRegion)));
    assert!(matches!(scale_factor(-10.0), Err(ExportError::EmptyRegion)));
    assert!(matches!(scale_factor(f64::NAN), Err(ExportError::EmptyRegion)));
}

#[test]
fn output_width_is_always_the_target_constant() {
    for width in [1.0, 100.0, 600.0, 777.0, 1999.0, 3840.0, 5000.0] {
        let (out_w, _) = output_size(width, 400.0).expect("valid region");
        assert_eq!(out_w, 3840, "width {width} should map onto the 4K target");
    }
}

#[test]
fn output_height_scales_uniformly_with_width() {
    let (out_w, out_h) = output_size(600.0, 400.0).expect("valid region");
    assert_eq!(out_w, 3840);
    assert_eq!(out_h, 2560);
}

#[test]
fn output_height_never_rounds_to_zero() {
    // 3840/600 * 0.05 rounds to 0 without the floor.
    let (_, out_h) = output_size(600.0, 0.05).expect("valid region");
    assert!(out_h >= 1);
}

// =============================================================
// File naming
// =============================================================

#[test]
fn file_name_embeds_timestamp_for_uniqueness() {
    assert_eq!(export_file_name(1_700_000_000_123), "smart-board-1700000000123.png");
    assert_ne!(export_file_name(1), export_file_name(2));
}

// =============================================================
// Font-fallback retry policy
// =============================================================

fn request() -> RasterRequest {
    RasterRequest { scale: 6.4, background: "#1a2a22".to_owned(), skip_fonts: false }
}

fn image() -> RasterImage {
    RasterImage { data_url: "data:image/png;base64,AA==".to_owned(), width: 3840, height: 2560 }
}

/// Rasterizer fake that fails its first `failures` calls and records every
/// request it sees.
struct FlakyRasterizer {
    failures: usize,
    calls: RefCell<Vec<RasterRequest>>,
}

impl FlakyRasterizer {
    fn new(failures: usize) -> Self {
        Self { failures, calls: RefCell::new(Vec::new()) }
    }

    async fn attempt(&self, req: RasterRequest) -> Result<RasterImage, String> {
        let call_index = {
            let mut calls = self.calls.borrow_mut();
            calls.push(req);
            calls.len()
        };
        if call_index <= self.failures {
            Err(format!("attempt {call_index}: cssRules access blocked"))
        } else {
            Ok(image())
        }
    }
}

#[test]
fn first_success_skips_the_retry() {
    let raster = FlakyRasterizer::new(0);
    let outcome = block_on(rasterize_with_font_fallback(|req| raster.attempt(req), request()))
        .expect("first attempt succeeds");
    assert!(!outcome.fonts_degraded);
    assert_eq!(raster.calls.borrow().len(), 1);
    assert!(!raster.calls.borrow()[0].skip_fonts);
}

#[test]
fn first_failure_retries_once_without_fonts() {
    let raster = FlakyRasterizer::new(1);
    let outcome = block_on(rasterize_with_font_fallback(|req| raster.attempt(req), request()))
        .expect("retry succeeds");
    assert!(outcome.fonts_degraded);
    let calls = raster.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(!calls[0].skip_fonts);
    assert!(calls[1].skip_fonts);
}

#[test]
fn retry_preserves_scale_and_background() {
    let raster = FlakyRasterizer::new(1);
    block_on(rasterize_with_font_fallback(|req| raster.attempt(req), request()))
        .expect("retry succeeds");
    let calls = raster.calls.borrow();
    assert_eq!(calls[1].scale, calls[0].scale);
    assert_eq!(calls[1].background, calls[0].background);
}

#[test]
fn second_failure_is_terminal_with_the_second_error() {
    let raster = FlakyRasterizer::new(2);
    let err = block_on(rasterize_with_font_fallback(|req| raster.attempt(req), request()))
        .expect_err("both attempts fail");
    assert_eq!(raster.calls.borrow().len(), 2, "exactly one retry, never more");
    assert!(matches!(err, ExportError::Raster(ref msg) if msg.contains("attempt 2")));
}

#[test]
fn fonts_already_skipped_means_single_attempt() {
    let raster = FlakyRasterizer::new(1);
    let err = block_on(rasterize_with_font_fallback(
        |req| raster.attempt(req),
        request().without_fonts(),
    ))
    .expect_err("single degraded attempt fails");
    assert_eq!(raster.calls.borrow().len(), 1);
    assert!(matches!(err, ExportError::Raster(_)));
}

#[test]
fn degraded_request_success_reports_degradation() {
    let raster = FlakyRasterizer::new(0);
    let outcome = block_on(rasterize_with_font_fallback(
        |req| raster.attempt(req),
        request().without_fonts(),
    ))
    .expect("degraded attempt succeeds");
    assert!(outcome.fonts_degraded);
}
