use ratatui::style::Color;

/// Error returned when a color string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color '{0}'")]
pub struct ColorParseError(pub String);

/// Parse a color name or `#rgb` / `#rrggbb` hex string into a terminal color.
///
/// `transparent` maps to [`Color::Reset`], which leaves the cell background
/// untouched.
pub fn parse_color(color: &str) -> Result<Color, ColorParseError> {
    let normalized = color.trim().to_lowercase();
    let parsed = match normalized.as_str() {
        "transparent" | "reset" | "none" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        "orange" => Color::Rgb(255, 165, 0),
        hex if hex.starts_with('#') => parse_hex(&hex[1..]).ok_or_else(|| ColorParseError(color.to_string()))?,
        _ => return Err(ColorParseError(color.to_string())),
    };
    Ok(parsed)
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut channels = digits.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            Some(Color::Rgb(channels.next()??, channels.next()??, channels.next()??))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Whether drawing this color would paint anything
#[must_use]
pub fn is_transparent(color: Color) -> bool {
    color == Color::Reset
}

/// Pick a readable foreground for text drawn on top of `background`
#[must_use]
pub fn contrast_fg(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
            if luma > 150.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::White | Color::Gray | Color::LightYellow | Color::LightGreen | Color::LightCyan | Color::Yellow => {
            Color::Black
        }
        _ => Color::White,
    }
}
