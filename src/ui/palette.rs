use ratatui::style::Color;

/// Preset swatches offered by the color picker, as (name, hex).
pub const SWATCHES: [(&str, &str); 12] = [
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("amber", "#f59e0b"),
    ("green", "#22c55e"),
    ("teal", "#14b8a6"),
    ("blue", "#3b82f6"),
    ("indigo", "#6366f1"),
    ("purple", "#a855f7"),
    ("pink", "#ec4899"),
    ("gray", "#6b7280"),
    ("slate", "#1f2937"),
    ("white", "#f9fafb"),
];

/// Fallback for colors that cannot be parsed.
pub const NEUTRAL: Color = Color::Rgb(107, 114, 128);

/// Canonical lowercase `#rrggbb` form of `#rgb` or `#rrggbb` input.
pub fn normalize_hex(s: &str) -> Option<String> {
    let digits = s.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = digits.to_ascii_lowercase();
    match digits.len() {
        6 => Some(format!("#{}", digits)),
        3 => Some(
            std::iter::once('#')
                .chain(digits.chars().flat_map(|c| [c, c]))
                .collect(),
        ),
        _ => None,
    }
}

/// Parse a stored color: hex, a swatch name, or anything ratatui understands.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        let hex = normalize_hex(s)?;
        let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    if let Some((_, hex)) = SWATCHES.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)) {
        return parse_color(hex);
    }
    s.parse::<Color>().ok()
}

pub fn display_color(s: &str) -> Color {
    parse_color(s).unwrap_or(NEUTRAL)
}

pub fn swatch_index(s: &str) -> Option<usize> {
    let hex = normalize_hex(s);
    SWATCHES.iter().position(|(name, swatch)| {
        name.eq_ignore_ascii_case(s.trim()) || hex.as_deref() == Some(*swatch)
    })
}

/// Black or white, whichever reads better on top of `bg`.
pub fn contrast_text(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 160.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::White | Color::Yellow | Color::LightYellow | Color::LightCyan => Color::Black,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#3B82F6"), Some("#3b82f6".into()));
        assert_eq!(normalize_hex(" #abc "), Some("#aabbcc".into()));
        assert_eq!(normalize_hex("3b82f6"), None);
        assert_eq!(normalize_hex("#12345"), None);
        assert_eq!(normalize_hex("#ggg"), None);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ef4444"), Some(Color::Rgb(0xef, 0x44, 0x44)));
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("Teal"), Some(Color::Rgb(0x14, 0xb8, 0xa6)));
        assert_eq!(parse_color("#xyz"), None);
        assert_eq!(display_color("#xyz"), NEUTRAL);
    }

    #[test]
    fn test_swatch_index() {
        assert_eq!(swatch_index("#3B82F6"), Some(5));
        assert_eq!(swatch_index("slate"), Some(10));
        assert_eq!(swatch_index("#123456"), None);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color::Rgb(249, 250, 251)), Color::Black);
        assert_eq!(contrast_text(Color::Rgb(31, 41, 55)), Color::White);
        assert_eq!(contrast_text(Color::Blue), Color::White);
    }
}
