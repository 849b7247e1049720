use super::*;

#[test]
fn font_px_parses_and_floors_at_one() {
    assert_eq!(parse_font_px("48"), 48);
    assert_eq!(parse_font_px("0"), 1);
    assert_eq!(parse_font_px(""), 1);
    assert_eq!(parse_font_px("abc"), 1);
    assert_eq!(parse_font_px(" 14 "), 14);
}

#[test]
fn line_height_parses_and_floors_at_tenth() {
    assert_eq!(parse_line_height("1.5"), 1.5);
    assert_eq!(parse_line_height("0"), 0.1);
    assert_eq!(parse_line_height("-3"), 0.1);
    assert_eq!(parse_line_height("x"), 0.1);
    assert_eq!(parse_line_height("NaN"), 0.1);
}

#[test]
fn dimension_parses_with_ui_floor_of_one_hundred() {
    assert_eq!(parse_dimension_px("640"), 640);
    assert_eq!(parse_dimension_px("40"), 100);
    assert_eq!(parse_dimension_px(""), 100);
}
