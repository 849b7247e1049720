//! Board content and styling state.
//!
//! DESIGN
//! ======
//! One aggregate owned by the application root, mutated only through named
//! operations so every invariant lives in exactly one place. The kind toggle
//! is an explicit transition (`toggle_kind`) that resets the ink — never an
//! incidental reactive side effect — and `clear` resets text and overlay
//! together, never one without the other.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::color::is_valid_hex;
use board::model::{BoardKind, BoardSnapshot, OverlaySource, font_face};

/// Everything the board view and the export pipeline read.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub kind: BoardKind,
    pub text: String,
    /// Chalk/marker color. Always set; reset on every kind toggle.
    pub ink: String,
    /// Font size in CSS pixels. Programmatic floor is 1; the UI slider
    /// bottoms out at 8.
    pub font_px: u32,
    /// Line height multiplier, strictly positive.
    pub line_height: f64,
    /// CSS family name; always one of the fixed catalog.
    pub font_family: String,
    /// Requested board dimensions. Programmatic floor is 1; the UI controls
    /// bottom out at 100.
    pub board_width: u32,
    pub board_height: u32,
    /// At most one uploaded background at a time.
    pub overlay: Option<OverlaySource>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            kind: BoardKind::Chalk,
            text: String::new(),
            ink: BoardKind::Chalk.default_ink().to_owned(),
            font_px: 14,
            line_height: 1.1,
            font_family: "Aref Ruqaa".to_owned(),
            board_width: 600,
            board_height: 400,
            overlay: None,
        }
    }
}

impl BoardState {
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Set the ink color; values that do not parse as hex are ignored so the
    /// invariant "ink is always set" cannot be broken by a bad input.
    pub fn set_ink(&mut self, ink: &str) {
        if is_valid_hex(ink) {
            self.ink = ink.to_owned();
        }
    }

    pub fn set_font_px(&mut self, px: u32) {
        self.font_px = px.max(1);
    }

    pub fn set_line_height(&mut self, multiplier: f64) {
        if multiplier > 0.0 && multiplier.is_finite() {
            self.line_height = multiplier;
        }
    }

    /// Select a catalog face; unknown families are rejected.
    pub fn set_font_family(&mut self, family: &str) {
        if font_face(family).is_some() {
            self.font_family = family.to_owned();
        }
    }

    pub fn set_board_width(&mut self, px: u32) {
        self.board_width = px.max(1);
    }

    pub fn set_board_height(&mut self, px: u32) {
        self.board_height = px.max(1);
    }

    /// Switch between chalk and marker boards. Always overwrites the ink
    /// with the new kind's canonical default, discarding any custom color.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        self.ink = self.kind.default_ink().to_owned();
    }

    /// Clear the written content: text and overlay together. Returns the
    /// removed overlay so the caller can revoke its blob URL.
    pub fn clear(&mut self) -> Option<OverlaySource> {
        self.text.clear();
        self.overlay.take()
    }

    /// Install a new background overlay, returning the replaced one (if any)
    /// so its blob URL can be revoked.
    pub fn set_overlay(&mut self, source: OverlaySource) -> Option<OverlaySource> {
        self.overlay.replace(source)
    }

    /// Content and styling for the rasterizer. Width/height are the
    /// *requested* dimensions; the export pipeline overrides them with live
    /// layout metrics before drawing.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            kind: self.kind,
            text: self.text.clone(),
            ink: self.ink.clone(),
            font_px: f64::from(self.font_px),
            line_height: self.line_height,
            font_family: self.font_family.clone(),
            width_px: f64::from(self.board_width),
            height_px: f64::from(self.board_height),
            overlay: self.overlay.clone(),
        }
    }
}
