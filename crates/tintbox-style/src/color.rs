//! Terminal color tokens

use std::fmt;

use crate::style::StyleParseError;

/// Named colors understood by the parser, with their ANSI foreground codes.
const NAMED_COLORS: &[(&str, u8)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("gray", 37),
    ("grey", 37),
    ("darkgray", 90),
    ("darkgrey", 90),
    ("lightred", 91),
    ("lightgreen", 92),
    ("lightyellow", 93),
    ("lightblue", 94),
    ("lightmagenta", 95),
    ("lightcyan", 96),
    ("white", 97),
    ("default", 39),
];

/// A single color token: either a named color or a raw RGB value.
///
/// RGB values parse from `#rrggbb` and `rgb(r,g,b)` notation; both format
/// back as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// A named color token such as `red` or `darkgray`.
    Named(String),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a single color token.
    pub fn parse(token: &str) -> Result<Self, StyleParseError> {
        let token = token.trim();
        if let Some(hex) = token.strip_prefix('#') {
            if hex.len() == 6 {
                if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                    let r = ((rgb >> 16) & 0xff) as u8;
                    let g = ((rgb >> 8) & 0xff) as u8;
                    let b = (rgb & 0xff) as u8;
                    return Ok(Color::Rgb(r, g, b));
                }
            }
            return Err(StyleParseError::InvalidColor(token.to_string()));
        }
        if let Some(body) = token
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut parts = body.split(',').map(|part| part.trim().parse::<u8>());
            if let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            {
                return Ok(Color::Rgb(r, g, b));
            }
            return Err(StyleParseError::InvalidColor(token.to_string()));
        }
        let name = token.to_ascii_lowercase();
        if NAMED_COLORS.iter().any(|(known, _)| *known == name) {
            return Ok(Color::Named(name));
        }
        Err(StyleParseError::InvalidColor(token.to_string()))
    }

    /// ANSI SGR code for this color as a foreground, e.g. `31` or `38;2;255;85;85`.
    pub(crate) fn fg_code(&self) -> String {
        match self {
            Color::Named(name) => named_code(name).to_string(),
            Color::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// ANSI SGR code for this color as a background.
    pub(crate) fn bg_code(&self) -> String {
        match self {
            Color::Named(name) => (named_code(name) + 10).to_string(),
            Color::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

fn named_code(name: &str) -> u8 {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, code)| *code)
        .unwrap_or(39)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#383b3d").unwrap(), Color::Rgb(0x38, 0x3b, 0x3d));
        assert_eq!(Color::parse("#000000").unwrap(), Color::Rgb(0, 0, 0));
        assert!(Color::parse("#38").is_err());
        assert!(Color::parse("#38zb3d").is_err());
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(Color::parse("rgb(255,85,85)").unwrap(), Color::Rgb(255, 85, 85));
        assert!(Color::parse("rgb(256,0,0)").is_err());
        assert!(Color::parse("rgb(1,2)").is_err());
        assert!(Color::parse("rgb(1,2,3,4)").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("red").unwrap(), Color::Named("red".to_string()));
        assert_eq!(Color::parse("GREY").unwrap(), Color::Named("grey".to_string()));
        assert!(Color::parse("vermilion").is_err());
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(Color::Rgb(255, 85, 85).to_string(), "#ff5555");
        assert_eq!(Color::Named("red".to_string()).to_string(), "red");
        // rgb(...) notation canonicalizes to hex
        let parsed = Color::parse("rgb(255,85,85)").unwrap();
        assert_eq!(parsed.to_string(), "#ff5555");
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(Color::Named("red".to_string()).fg_code(), "31");
        assert_eq!(Color::Named("red".to_string()).bg_code(), "41");
        assert_eq!(Color::Rgb(1, 2, 3).fg_code(), "38;2;1;2;3");
        assert_eq!(Color::Rgb(1, 2, 3).bg_code(), "48;2;1;2;3");
    }
}
