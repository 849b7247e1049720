use board::model::{BoardKind, OverlaySource};

use super::*;

fn overlay() -> OverlaySource {
    OverlaySource { url: "blob:one".to_owned(), mime: "image/png".to_owned() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_matches_chalkboard_launch() {
    let state = BoardState::default();
    assert_eq!(state.kind, BoardKind::Chalk);
    assert!(state.text.is_empty());
    assert_eq!(state.ink, "#ffffff");
    assert_eq!(state.font_px, 14);
    assert_eq!(state.line_height, 1.1);
    assert_eq!(state.font_family, "Aref Ruqaa");
    assert_eq!((state.board_width, state.board_height), (600, 400));
    assert!(state.overlay.is_none());
}

// =============================================================
// Kind toggle resets ink
// =============================================================

#[test]
fn toggle_resets_ink_to_new_kind_default() {
    let mut state = BoardState::default();
    state.toggle_kind();
    assert_eq!(state.kind, BoardKind::White);
    assert_eq!(state.ink, "#1e40af");
}

#[test]
fn toggle_discards_custom_ink() {
    let mut state = BoardState::default();
    state.toggle_kind();
    state.set_ink("#dc2626");
    state.toggle_kind();
    // Back on chalk: the chalk default wins, not the custom marker red.
    assert_eq!(state.kind, BoardKind::Chalk);
    assert_eq!(state.ink, "#ffffff");
}

#[test]
fn double_toggle_restores_kind_default_not_custom_ink() {
    let mut state = BoardState::default();
    state.set_ink("#fce4ec");
    state.toggle_kind();
    state.toggle_kind();
    assert_eq!(state.kind, BoardKind::Chalk);
    assert_eq!(state.ink, "#ffffff");
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_resets_text_and_overlay_together() {
    let mut state = BoardState::default();
    state.set_text("نص".to_owned());
    assert!(state.set_overlay(overlay()).is_none());

    let removed = state.clear();
    assert!(state.text.is_empty());
    assert!(state.overlay.is_none());
    assert_eq!(removed, Some(overlay()));
}

#[test]
fn clear_without_overlay_returns_none() {
    let mut state = BoardState::default();
    state.set_text("نص".to_owned());
    assert!(state.clear().is_none());
    assert!(state.text.is_empty());
}

// =============================================================
// Overlay replacement
// =============================================================

#[test]
fn set_overlay_returns_replaced_source_for_revocation() {
    let mut state = BoardState::default();
    state.set_overlay(overlay());
    let replaced = state.set_overlay(OverlaySource {
        url: "blob:two".to_owned(),
        mime: "application/pdf".to_owned(),
    });
    assert_eq!(replaced, Some(overlay()));
    assert!(state.overlay.as_ref().is_some_and(|o| o.url == "blob:two"));
}

// =============================================================
// Setter floors and validation
// =============================================================

#[test]
fn font_px_floor_is_one() {
    let mut state = BoardState::default();
    state.set_font_px(0);
    assert_eq!(state.font_px, 1);
    state.set_font_px(400);
    assert_eq!(state.font_px, 400);
}

#[test]
fn line_height_rejects_non_positive_and_non_finite() {
    let mut state = BoardState::default();
    state.set_line_height(0.0);
    assert_eq!(state.line_height, 1.1);
    state.set_line_height(-2.0);
    assert_eq!(state.line_height, 1.1);
    state.set_line_height(f64::NAN);
    assert_eq!(state.line_height, 1.1);
    state.set_line_height(0.5);
    assert_eq!(state.line_height, 0.5);
}

#[test]
fn board_dimensions_floor_is_one() {
    let mut state = BoardState::default();
    state.set_board_width(0);
    state.set_board_height(0);
    assert_eq!((state.board_width, state.board_height), (1, 1));
}

#[test]
fn unknown_font_family_is_rejected() {
    let mut state = BoardState::default();
    state.set_font_family("Papyrus");
    assert_eq!(state.font_family, "Aref Ruqaa");
    state.set_font_family("Cairo");
    assert_eq!(state.font_family, "Cairo");
}

#[test]
fn invalid_ink_is_rejected() {
    let mut state = BoardState::default();
    state.set_ink("red");
    assert_eq!(state.ink, "#ffffff");
    state.set_ink("#166534");
    assert_eq!(state.ink, "#166534");
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_copies_content_and_styling() {
    let mut state = BoardState::default();
    state.set_text("درس".to_owned());
    state.set_font_px(32);
    state.set_overlay(overlay());

    let snap = state.snapshot();
    assert_eq!(snap.kind, BoardKind::Chalk);
    assert_eq!(snap.text, "درس");
    assert_eq!(snap.font_px, 32.0);
    assert_eq!((snap.width_px, snap.height_px), (600.0, 400.0));
    assert_eq!(snap.overlay, Some(overlay()));
}
