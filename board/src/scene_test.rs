use super::*;
use crate::model::OverlaySource;

fn snapshot(kind: BoardKind) -> BoardSnapshot {
    BoardSnapshot {
        kind,
        text: "درس اليوم".to_owned(),
        ink: kind.default_ink().to_owned(),
        font_px: 14.0,
        line_height: 1.1,
        font_family: "Aref Ruqaa".to_owned(),
        width_px: 600.0,
        height_px: 400.0,
        overlay: None,
    }
}

// =============================================================
// Dimensions and background
// =============================================================

#[test]
fn scene_dimensions_equal_snapshot_dimensions() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.width_px = 1234.0;
    snap.height_px = 321.0;
    let scene = build_scene(&snap);
    assert_eq!(scene.width, 1234.0);
    assert_eq!(scene.height, 321.0);
}

#[test]
fn background_is_kind_surface_constant() {
    assert_eq!(build_scene(&snapshot(BoardKind::Chalk)).background, "#1a2a22");
    assert_eq!(build_scene(&snapshot(BoardKind::White)).background, "#ffffff");
}

// =============================================================
// Text block
// =============================================================

#[test]
fn non_empty_text_passes_through() {
    let scene = build_scene(&snapshot(BoardKind::Chalk));
    assert_eq!(scene.text.text, "درس اليوم");
}

#[test]
fn empty_chalk_text_becomes_chalk_placeholder() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.text.clear();
    let scene = build_scene(&snap);
    assert_eq!(scene.text.text, BoardKind::Chalk.placeholder());
}

#[test]
fn empty_white_text_becomes_white_placeholder() {
    let mut snap = snapshot(BoardKind::White);
    snap.text.clear();
    let scene = build_scene(&snap);
    assert_eq!(scene.text.text, BoardKind::White.placeholder());
}

#[test]
fn text_block_is_top_right_anchored_with_symmetric_insets() {
    let scene = build_scene(&snapshot(BoardKind::Chalk));
    let inset = 600.0 - scene.text.right_x;
    assert_eq!(scene.text.top_y, inset);
    assert_eq!(scene.text.max_width, 600.0 - 2.0 * inset);
}

#[test]
fn text_block_width_never_collapses_below_one() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.width_px = 1.0;
    let scene = build_scene(&snap);
    assert!(scene.text.max_width >= 1.0);
}

#[test]
fn text_styling_comes_from_snapshot() {
    let mut snap = snapshot(BoardKind::White);
    snap.ink = "#dc2626".to_owned();
    snap.font_px = 48.0;
    snap.line_height = 2.0;
    let scene = build_scene(&snap);
    assert_eq!(scene.text.color, "#dc2626");
    assert_eq!(scene.text.font_px, 48.0);
    assert_eq!(scene.text.line_height, 2.0);
}

// =============================================================
// Overlay exclusion
// =============================================================

#[test]
fn image_overlay_is_included_at_low_alpha() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.overlay = Some(OverlaySource { url: "blob:img".to_owned(), mime: "image/jpeg".to_owned() });
    let scene = build_scene(&snap);
    let overlay = scene.overlay.as_ref();
    assert!(overlay.is_some_and(|l| l.url == "blob:img" && l.alpha < 1.0));
}

#[test]
fn pdf_overlay_is_excluded_from_the_scene() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.overlay = Some(OverlaySource { url: "blob:doc".to_owned(), mime: "application/pdf".to_owned() });
    assert!(build_scene(&snap).overlay.is_none());
}

// =============================================================
// Decorative layers
// =============================================================

#[test]
fn chalk_scene_has_dust_patches() {
    let scene = build_scene(&snapshot(BoardKind::Chalk));
    assert_eq!(scene.dust.len(), 3);
    assert!(scene.dust.iter().all(|patch| patch.alpha < 0.1));
}

#[test]
fn white_scene_has_no_dust() {
    assert!(build_scene(&snapshot(BoardKind::White)).dust.is_empty());
}

// =============================================================
// Signature
// =============================================================

#[test]
fn signature_is_fixed_gold_and_bottom_left() {
    let scene = build_scene(&snapshot(BoardKind::White));
    assert_eq!(scene.signature.color, "#FFD700");
    assert_eq!(scene.signature.text, "الأستاذ: حاجي العربي");
    assert!(scene.signature.left_x < scene.width / 2.0);
    assert!(scene.signature.baseline_y > scene.height / 2.0);
}

#[test]
fn signature_ignores_user_styling() {
    let mut snap = snapshot(BoardKind::Chalk);
    snap.ink = "#dc2626".to_owned();
    snap.font_px = 200.0;
    snap.font_family = "Cairo".to_owned();
    let scene = build_scene(&snap);
    assert_eq!(scene.signature.color, "#FFD700");
    assert_eq!(scene.signature.font_px, 32.0);
    assert_eq!(scene.signature.font_family, "Aref Ruqaa");
}

#[test]
fn chalk_signature_shadow_is_heavier_than_white() {
    let chalk = build_scene(&snapshot(BoardKind::Chalk));
    let white = build_scene(&snapshot(BoardKind::White));
    assert!(chalk.signature.shadow.blur > white.signature.shadow.blur);
}
