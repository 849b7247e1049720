//! Hex color parsing and CSS formatting helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    // Byte indexing below requires single-byte characters.
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some((r, g, b))
        }
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

fn channel(hex: &str) -> Option<u8> {
    match u8::from_str_radix(hex, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// True when the value parses as a hex color.
#[must_use]
pub fn is_valid_hex(raw: &str) -> bool {
    parse_hex_rgb(raw).is_some()
}

/// Format a hex color as a CSS `rgba()` value with the given alpha.
/// Unparseable input falls back to opaque-ish white, which reads on both
/// board surfaces.
#[must_use]
pub fn rgba_css(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((255, 255, 255));
    format!("rgba({r}, {g}, {b}, {alpha})")
}
