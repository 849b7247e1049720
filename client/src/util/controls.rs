//! Parsing and clamping for the numeric styling controls.
//!
//! The UI floors here are intentionally higher than the programmatic floors
//! enforced by the state setters: sliders and number inputs bottom out at a
//! usable value, while the state still accepts anything ≥ 1 (or > 0 for the
//! line height).

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

/// Font-size number input: unparseable input counts as 0, floor 1.
#[must_use]
pub fn parse_font_px(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0).max(1)
}

/// Line-height number input: unparseable input counts as 0, floor 0.1.
#[must_use]
pub fn parse_line_height(raw: &str) -> f64 {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    if value.is_finite() { value.max(0.1) } else { 0.1 }
}

/// Board dimension number input: unparseable input counts as 0, UI floor 100.
#[must_use]
pub fn parse_dimension_px(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0).max(100)
}
