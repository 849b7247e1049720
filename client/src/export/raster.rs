//! Browser rasterizer: one attempt = one offscreen canvas draw.
//!
//! The attempt boundary returns `Result<RasterImage, String>` so the retry
//! policy in `board::export` stays platform-free. Font loading goes through
//! `document.fonts`; a rejected load (the CORS case for externally hosted
//! faces) fails the attempt, which is what triggers the degraded retry.

#[cfg(feature = "hydrate")]
use board::export::{RasterImage, RasterRequest, output_size};
#[cfg(feature = "hydrate")]
use board::model::BoardSnapshot;
#[cfg(feature = "hydrate")]
use board::scene::build_scene;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

#[cfg(feature = "hydrate")]
fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

/// Rasterize a snapshot at the request's scale and return a PNG data URL.
///
/// # Errors
///
/// Returns a string describing the first failing platform call; the caller's
/// retry policy decides whether a degraded attempt follows.
#[cfg(feature = "hydrate")]
pub async fn rasterize(snapshot: BoardSnapshot, request: RasterRequest) -> Result<RasterImage, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document available")?;

    let (out_w, out_h) = output_size(snapshot.width_px, snapshot.height_px).map_err(|e| e.to_string())?;

    if !request.skip_fonts {
        load_font(&document, &snapshot.font_family, snapshot.font_px).await?;
        load_font(&document, board::consts::SIGNATURE_FONT_FAMILY, board::consts::SIGNATURE_FONT_PX).await?;
    }

    let scene = build_scene(&snapshot);
    let overlay_image = match &scene.overlay {
        Some(layer) => Some(load_image(&document, &layer.url).await?),
        None => None,
    };

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "created element is not a canvas")?;
    canvas.set_width(out_w);
    canvas.set_height(out_h);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or("2d context unavailable")?
        .dyn_into()
        .map_err(|_| "2d context has unexpected type")?;

    // The request's background is authoritative even before the scene draws
    // its own fill, so no transparent edge pixels survive rounding.
    ctx.set_fill_style_str(&request.background);
    ctx.fill_rect(0.0, 0.0, f64::from(out_w), f64::from(out_h));

    board::render::draw(&ctx, &scene, request.scale, overlay_image.as_ref(), request.skip_fonts)
        .map_err(js_err)?;

    let data_url = canvas.to_data_url_with_type("image/png").map_err(js_err)?;
    Ok(RasterImage { data_url, width: out_w, height: out_h })
}

/// Resolve a catalog face through the font loading API. Rejection here is
/// the canonical "externally hosted face is unreadable" failure.
#[cfg(feature = "hydrate")]
async fn load_font(document: &Document, family: &str, px: f64) -> Result<(), String> {
    let fonts = document.fonts();
    let shorthand = format!("{px}px \"{family}\"");
    let loaded = fonts.load(&shorthand).map_err(js_err)?;
    JsFuture::from(loaded)
        .await
        .map_err(|err| format!("font load rejected for {family}: {err:?}"))?;
    Ok(())
}

/// Decode an overlay image so `draw_image` has pixels to copy.
#[cfg(feature = "hydrate")]
async fn load_image(document: &Document, url: &str) -> Result<HtmlImageElement, String> {
    let image: HtmlImageElement = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "created element is not an image")?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|err| format!("overlay decode failed: {err:?}"))?;
    Ok(image)
}
