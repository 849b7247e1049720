//! Word wrapping for board text.
//!
//! The wrapping algorithm is generic over a text-measuring function so the
//! same code serves `measure_text` in the browser and a deterministic fake in
//! native tests. Blank lines are preserved (pre-wrap semantics) and words
//! wider than the available width break mid-word.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Wrap `text` into lines no wider than `max_width` under `measure`.
///
/// Always returns at least one line so callers can lay out a caret position
/// even for empty input.
pub fn wrap_lines(text: &str, max_width: f64, measure: &dyn Fn(&str) -> f64) -> Vec<String> {
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let words: Vec<&str> = raw_line.split_whitespace().collect();
        if words.is_empty() {
            out.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in words {
            if current.is_empty() {
                if measure(word) <= max_width {
                    current.push_str(word);
                } else {
                    let mut chunks = break_long_word(word, max_width, measure);
                    if let Some(last) = chunks.pop() {
                        out.extend(chunks);
                        current = last;
                    }
                }
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                out.push(std::mem::take(&mut current));
                if measure(word) <= max_width {
                    current = word.to_owned();
                } else {
                    let mut chunks = break_long_word(word, max_width, measure);
                    if let Some(last) = chunks.pop() {
                        out.extend(chunks);
                        current = last;
                    }
                }
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Break a single over-wide word into chunks that each fit `max_width`.
/// Every chunk keeps at least one character so this always terminates.
fn break_long_word(word: &str, max_width: f64, measure: &dyn Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && measure(&candidate) > max_width {
            lines.push(current);
            current = ch.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
