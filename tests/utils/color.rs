use ratatui::style::Color;
use speeddial::utils::color::{contrast_fg, is_transparent, parse_color};

#[test]
fn test_parse_named_colors() {
    assert_eq!(parse_color("black"), Ok(Color::Black));
    assert_eq!(parse_color(" Light_Blue "), Ok(Color::LightBlue));
    assert_eq!(parse_color("grey"), Ok(Color::Gray));
}

#[test]
fn test_parse_hex_colors() {
    assert_eq!(parse_color("#000"), Ok(Color::Rgb(0, 0, 0)));
    assert_eq!(parse_color("#fa0"), Ok(Color::Rgb(255, 170, 0)));
    assert_eq!(parse_color("#3498DB"), Ok(Color::Rgb(52, 152, 219)));
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#zzzzzz").is_err());
}

#[test]
fn test_transparent() {
    let color = parse_color("transparent").unwrap();
    assert!(is_transparent(color));
    assert!(!is_transparent(Color::Black));
}

#[test]
fn test_unknown_color_is_an_error() {
    let err = parse_color("plaid").unwrap_err();
    assert_eq!(err.to_string(), "Unknown color 'plaid'");
}

#[test]
fn test_contrast_fg() {
    assert_eq!(contrast_fg(Color::Black), Color::White);
    assert_eq!(contrast_fg(Color::White), Color::Black);
    assert_eq!(contrast_fg(Color::Rgb(250, 250, 250)), Color::Black);
    assert_eq!(contrast_fg(Color::Rgb(20, 20, 60)), Color::White);
}
