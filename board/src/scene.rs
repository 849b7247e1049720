//! Scene construction: turns a [`BoardSnapshot`] into a deterministic draw
//! list for the rasterizer.
//!
//! DESIGN
//! ======
//! The scene is pure data in back-to-front order: background, overlay, dust,
//! text, signature. Building it never touches the DOM, so the export layer
//! order, placeholder substitution, and foreign-content exclusion are all
//! natively testable.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{
    BOARD_PADDING_PX, OVERLAY_ALPHA, SIGNATURE_COLOR, SIGNATURE_FONT_FAMILY, SIGNATURE_FONT_PX,
    SIGNATURE_INSET_X_PX, SIGNATURE_INSET_Y_PX, SIGNATURE_TEXT, TEXT_PADDING_PX,
};
use crate::model::{BoardKind, BoardSnapshot};

/// Full draw list for one board, in back-to-front field order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Opaque background fill — no transparent gaps in the export.
    pub background: &'static str,
    pub overlay: Option<OverlayLayer>,
    pub dust: Vec<DustPatch>,
    pub text: TextBlock,
    pub signature: Signature,
}

/// A drawable background overlay (image uploads only).
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayer {
    pub url: String,
    pub alpha: f64,
}

/// One soft chalk-dust patch, positioned as fractions of the board size.
#[derive(Clone, Debug, PartialEq)]
pub struct DustPatch {
    pub cx_frac: f64,
    pub cy_frac: f64,
    pub radius_frac: f64,
    pub alpha: f64,
}

/// The user's text block: right-aligned, top-anchored, word-wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub color: String,
    pub font_family: String,
    pub font_px: f64,
    pub line_height: f64,
    /// Right edge of the block (RTL text flows leftward from here).
    pub right_x: f64,
    /// Top edge of the first line.
    pub top_y: f64,
    pub max_width: f64,
}

/// The fixed gold signature anchored to the bottom-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub text: &'static str,
    pub color: &'static str,
    pub font_family: &'static str,
    pub font_px: f64,
    /// Left edge of the signature.
    pub left_x: f64,
    /// Baseline of the signature.
    pub baseline_y: f64,
    pub shadow: Shadow,
}

/// Canvas shadow parameters for the signature glow.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub blur: f64,
    pub offset: f64,
}

/// Build the draw list for a snapshot.
///
/// Empty text is replaced with the kind's placeholder here, so an export of
/// an untouched board shows the placeholder rather than a blank surface.
/// Non-image overlays (PDF embeds) are excluded: embedded document viewers
/// cannot be serialized to a bitmap and would blank the output.
#[must_use]
pub fn build_scene(snapshot: &BoardSnapshot) -> Scene {
    let inset = BOARD_PADDING_PX + TEXT_PADDING_PX;
    let text = if snapshot.text.is_empty() {
        snapshot.kind.placeholder().to_owned()
    } else {
        snapshot.text.clone()
    };

    Scene {
        width: snapshot.width_px,
        height: snapshot.height_px,
        background: snapshot.kind.surface_color(),
        overlay: snapshot
            .overlay
            .as_ref()
            .filter(|source| source.is_image())
            .map(|source| OverlayLayer { url: source.url.clone(), alpha: OVERLAY_ALPHA }),
        dust: dust_patches(snapshot.kind),
        text: TextBlock {
            text,
            color: snapshot.ink.clone(),
            font_family: snapshot.font_family.clone(),
            font_px: snapshot.font_px,
            line_height: snapshot.line_height,
            right_x: snapshot.width_px - inset,
            top_y: inset,
            max_width: (snapshot.width_px - 2.0 * inset).max(1.0),
        },
        signature: Signature {
            text: SIGNATURE_TEXT,
            color: SIGNATURE_COLOR,
            font_family: SIGNATURE_FONT_FAMILY,
            font_px: SIGNATURE_FONT_PX,
            left_x: SIGNATURE_INSET_X_PX,
            baseline_y: snapshot.height_px - SIGNATURE_INSET_Y_PX,
            shadow: signature_shadow(snapshot.kind),
        },
    }
}

/// Chalkboards get three soft white dust patches; whiteboards stay clean
/// (their gloss is a DOM-only decoration).
fn dust_patches(kind: BoardKind) -> Vec<DustPatch> {
    match kind {
        BoardKind::Chalk => vec![
            DustPatch { cx_frac: 0.25, cy_frac: 0.25, radius_frac: 0.30, alpha: 0.04 },
            DustPatch { cx_frac: 0.72, cy_frac: 0.65, radius_frac: 0.28, alpha: 0.05 },
            DustPatch { cx_frac: 0.50, cy_frac: 0.50, radius_frac: 0.45, alpha: 0.02 },
        ],
        BoardKind::White => Vec::new(),
    }
}

fn signature_shadow(kind: BoardKind) -> Shadow {
    match kind {
        BoardKind::Chalk => Shadow { color: "rgba(0, 0, 0, 0.8)", blur: 4.0, offset: 2.0 },
        BoardKind::White => Shadow { color: "rgba(0, 0, 0, 0.3)", blur: 2.0, offset: 1.0 },
    }
}
