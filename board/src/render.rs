//! Rasterization: draws a [`Scene`] onto a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only scene and
//! produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the export pipeline converts them into its own error type at the boundary.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::color::rgba_css;
use crate::consts::OVERLAY_PADDING_PX;
use crate::layout::wrap_lines;
use crate::scene::{DustPatch, OverlayLayer, Scene, Signature, TextBlock};

/// Draw the whole scene at a uniform `scale`.
///
/// The caller sizes the canvas to `scene.width * scale` by
/// `scene.height * scale` and pre-decodes the overlay image, if any.
/// `skip_fonts` swaps every custom face for the platform default, matching
/// the degraded retry of the export pipeline.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    scale: f64,
    overlay_image: Option<&HtmlImageElement>,
    skip_fonts: bool,
) -> Result<(), JsValue> {
    // All subsequent coordinates are in board-local CSS pixels.
    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;

    // Layer 1: opaque background.
    ctx.set_fill_style_str(scene.background);
    ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

    // Layer 2: uploaded overlay, contain-fit inside the padded area.
    if let (Some(layer), Some(image)) = (&scene.overlay, overlay_image) {
        draw_overlay(ctx, scene, layer, image)?;
    }

    // Layer 3: chalk dust.
    for patch in &scene.dust {
        draw_dust_patch(ctx, scene, patch)?;
    }

    // Layer 4: the user's text.
    draw_text_block(ctx, &scene.text, skip_fonts)?;

    // Layer 5: the signature.
    draw_signature(ctx, &scene.signature, skip_fonts)?;

    Ok(())
}

fn draw_overlay(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    layer: &OverlayLayer,
    image: &HtmlImageElement,
) -> Result<(), JsValue> {
    let natural_w = f64::from(image.natural_width());
    let natural_h = f64::from(image.natural_height());
    if natural_w <= 0.0 || natural_h <= 0.0 {
        return Ok(());
    }

    let area_w = (scene.width - 2.0 * OVERLAY_PADDING_PX).max(1.0);
    let area_h = (scene.height - 2.0 * OVERLAY_PADDING_PX).max(1.0);
    let fit = (area_w / natural_w).min(area_h / natural_h);
    let draw_w = natural_w * fit;
    let draw_h = natural_h * fit;
    let x = (scene.width - draw_w) / 2.0;
    let y = (scene.height - draw_h) / 2.0;

    ctx.save();
    ctx.set_global_alpha(layer.alpha);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, draw_w, draw_h)?;
    ctx.restore();
    Ok(())
}

fn draw_dust_patch(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    patch: &DustPatch,
) -> Result<(), JsValue> {
    let cx = patch.cx_frac * scene.width;
    let cy = patch.cy_frac * scene.height;
    let radius = patch.radius_frac * scene.width.max(scene.height);

    let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius)?;
    gradient.add_color_stop(0.0, &rgba_css("#ffffff", patch.alpha))?;
    gradient.add_color_stop(1.0, &rgba_css("#ffffff", 0.0))?;

    ctx.save();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
    ctx.restore();
    Ok(())
}

fn draw_text_block(
    ctx: &CanvasRenderingContext2d,
    block: &TextBlock,
    skip_fonts: bool,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(&block.color);
    ctx.set_text_align("right");
    ctx.set_text_baseline("top");
    ctx.set_font(&font_css(&block.font_family, block.font_px, skip_fonts));

    let lines = wrap_lines(&block.text, block.max_width, &|probe| measured_text_width(ctx, probe));
    let advance = block.font_px * block.line_height;
    for (idx, line) in lines.iter().enumerate() {
        let y = block.top_y + (idx as f64 * advance);
        ctx.fill_text(line, block.right_x, y)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_signature(
    ctx: &CanvasRenderingContext2d,
    signature: &Signature,
    skip_fonts: bool,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(signature.color);
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font(&signature_font_css(signature, skip_fonts));
    ctx.set_shadow_color(signature.shadow.color);
    ctx.set_shadow_blur(signature.shadow.blur);
    ctx.set_shadow_offset_x(signature.shadow.offset);
    ctx.set_shadow_offset_y(signature.shadow.offset);
    ctx.fill_text(signature.text, signature.left_x, signature.baseline_y)?;
    ctx.restore();
    Ok(())
}

fn font_css(family: &str, px: f64, skip_fonts: bool) -> String {
    if skip_fonts {
        format!("{px}px sans-serif")
    } else {
        format!("{px}px \"{family}\", sans-serif")
    }
}

fn signature_font_css(signature: &Signature, skip_fonts: bool) -> String {
    if skip_fonts {
        format!("bold {}px serif", signature.font_px)
    } else {
        format!("bold {}px \"{}\", serif", signature.font_px, signature.font_family)
    }
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => f64::INFINITY,
    }
}
