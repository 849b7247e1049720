//! Shared palette, typography, layout, and export constants.

// ── Export ──────────────────────────────────────────────────────

/// Fixed horizontal resolution of exported images (4K).
pub const EXPORT_TARGET_WIDTH_PX: f64 = 3840.0;

/// File name prefix for exported boards.
pub const EXPORT_FILE_PREFIX: &str = "smart-board";

// ── Surfaces and ink ────────────────────────────────────────────

/// Chalkboard surface color (deep green slate).
pub const CHALK_SURFACE: &str = "#1a2a22";

/// Whiteboard surface color.
pub const WHITE_SURFACE: &str = "#ffffff";

/// Default chalk ink (white chalk).
pub const CHALK_DEFAULT_INK: &str = "#ffffff";

/// Default whiteboard ink (blue marker).
pub const WHITE_DEFAULT_INK: &str = "#1e40af";

/// Chalk swatch palette: white plus pale pastel chalks.
pub const CHALK_SWATCHES: [&str; 6] = [
    "#ffffff", "#fffde7", "#fce4ec", "#f1f8e9", "#e3f2fd", "#fff3e0",
];

/// Whiteboard swatch palette: saturated marker colors.
pub const WHITE_SWATCHES: [&str; 6] = [
    "#1e40af", "#dc2626", "#166534", "#111827", "#6b21a8", "#9a3412",
];

// ── Placeholder and signature text ──────────────────────────────

/// Placeholder shown on an empty chalkboard.
pub const CHALK_PLACEHOLDER: &str = "اكتب هنا بالطباشير...";

/// Placeholder shown on an empty whiteboard.
pub const WHITE_PLACEHOLDER: &str = "اكتب هنا بقلم السبورة...";

/// Fixed signature rendered in the bottom-left corner of every board.
pub const SIGNATURE_TEXT: &str = "الأستاذ: حاجي العربي";

/// Signature ink — bright gold, independent of user styling.
pub const SIGNATURE_COLOR: &str = "#FFD700";

/// Signature font family (decorative ruqaa face).
pub const SIGNATURE_FONT_FAMILY: &str = "Aref Ruqaa";

/// Signature font size in CSS pixels (2rem).
pub const SIGNATURE_FONT_PX: f64 = 32.0;

// ── Board layout ────────────────────────────────────────────────

/// Inner padding between the board frame and its content (1.5rem).
pub const BOARD_PADDING_PX: f64 = 24.0;

/// Extra padding around the text block itself (0.5rem).
pub const TEXT_PADDING_PX: f64 = 8.0;

/// Signature inset from the left edge.
pub const SIGNATURE_INSET_X_PX: f64 = 40.0;

/// Signature inset from the bottom edge.
pub const SIGNATURE_INSET_Y_PX: f64 = 24.0;

/// Opacity of the uploaded background overlay.
pub const OVERLAY_ALPHA: f64 = 0.1;

/// Padding around the overlay's contain-fit area (3rem).
pub const OVERLAY_PADDING_PX: f64 = 48.0;
