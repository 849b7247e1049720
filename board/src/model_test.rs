use super::*;

// =============================================================
// BoardKind
// =============================================================

#[test]
fn default_kind_is_chalk() {
    assert_eq!(BoardKind::default(), BoardKind::Chalk);
}

#[test]
fn toggled_swaps_kinds_both_ways() {
    assert_eq!(BoardKind::Chalk.toggled(), BoardKind::White);
    assert_eq!(BoardKind::White.toggled(), BoardKind::Chalk);
}

#[test]
fn double_toggle_is_identity() {
    assert_eq!(BoardKind::Chalk.toggled().toggled(), BoardKind::Chalk);
    assert_eq!(BoardKind::White.toggled().toggled(), BoardKind::White);
}

#[test]
fn surface_colors_are_distinct_constants() {
    assert_eq!(BoardKind::Chalk.surface_color(), "#1a2a22");
    assert_eq!(BoardKind::White.surface_color(), "#ffffff");
}

#[test]
fn default_inks_match_kind() {
    assert_eq!(BoardKind::Chalk.default_ink(), "#ffffff");
    assert_eq!(BoardKind::White.default_ink(), "#1e40af");
}

#[test]
fn placeholders_differ_per_kind() {
    assert_ne!(BoardKind::Chalk.placeholder(), BoardKind::White.placeholder());
    assert!(!BoardKind::Chalk.placeholder().is_empty());
    assert!(!BoardKind::White.placeholder().is_empty());
}

#[test]
fn swatch_palettes_have_six_entries_led_by_default_ink() {
    for kind in [BoardKind::Chalk, BoardKind::White] {
        let swatches = kind.swatches();
        assert_eq!(swatches.len(), 6);
        assert_eq!(swatches[0], kind.default_ink());
    }
}

// =============================================================
// Font catalog
// =============================================================

#[test]
fn catalog_has_six_unique_families() {
    let mut families: Vec<&str> = FONT_CATALOG.iter().map(|f| f.family).collect();
    families.sort_unstable();
    families.dedup();
    assert_eq!(families.len(), 6);
}

#[test]
fn font_face_finds_known_family() {
    let face = font_face("Amiri");
    assert!(face.is_some_and(|f| f.css_class == "f-amiri"));
}

#[test]
fn font_face_rejects_unknown_family() {
    assert!(font_face("Comic Sans MS").is_none());
}

// =============================================================
// OverlaySource
// =============================================================

#[test]
fn image_overlay_is_image_not_pdf() {
    let source = OverlaySource { url: "blob:a".to_owned(), mime: "image/png".to_owned() };
    assert!(source.is_image());
    assert!(!source.is_pdf());
}

#[test]
fn pdf_overlay_is_pdf_not_image() {
    let source = OverlaySource { url: "blob:b".to_owned(), mime: "application/pdf".to_owned() };
    assert!(source.is_pdf());
    assert!(!source.is_image());
}
