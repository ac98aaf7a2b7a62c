//! Style descriptors: text attributes, colors, and hyperlink targets

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::Color;

bitflags! {
    /// Boolean text attributes carried by a [`Style`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attributes: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        /// Double underline.
        const UNDERLINE2 = 1 << 4;
        const BLINK = 1 << 5;
        /// Fast blink.
        const BLINK2 = 1 << 6;
        const REVERSE = 1 << 7;
        const CONCEAL = 1 << 8;
        const STRIKE = 1 << 9;
        const FRAME = 1 << 10;
        const ENCIRCLE = 1 << 11;
        const OVERLINE = 1 << 12;
    }
}

/// Attribute words accepted by the parser, including short aliases.
const ATTRIBUTE_WORDS: &[(&str, Attributes)] = &[
    ("bold", Attributes::BOLD),
    ("b", Attributes::BOLD),
    ("dim", Attributes::DIM),
    ("d", Attributes::DIM),
    ("italic", Attributes::ITALIC),
    ("i", Attributes::ITALIC),
    ("underline", Attributes::UNDERLINE),
    ("u", Attributes::UNDERLINE),
    ("underline2", Attributes::UNDERLINE2),
    ("uu", Attributes::UNDERLINE2),
    ("blink", Attributes::BLINK),
    ("blink2", Attributes::BLINK2),
    ("reverse", Attributes::REVERSE),
    ("r", Attributes::REVERSE),
    ("conceal", Attributes::CONCEAL),
    ("c", Attributes::CONCEAL),
    ("strike", Attributes::STRIKE),
    ("s", Attributes::STRIKE),
    ("frame", Attributes::FRAME),
    ("encircle", Attributes::ENCIRCLE),
    ("overline", Attributes::OVERLINE),
    ("o", Attributes::OVERLINE),
];

/// Canonical word for each attribute, in the order they are emitted.
const CANONICAL_WORDS: &[(Attributes, &str)] = &[
    (Attributes::BOLD, "bold"),
    (Attributes::DIM, "dim"),
    (Attributes::ITALIC, "italic"),
    (Attributes::UNDERLINE, "underline"),
    (Attributes::UNDERLINE2, "underline2"),
    (Attributes::BLINK, "blink"),
    (Attributes::BLINK2, "blink2"),
    (Attributes::REVERSE, "reverse"),
    (Attributes::CONCEAL, "conceal"),
    (Attributes::STRIKE, "strike"),
    (Attributes::FRAME, "frame"),
    (Attributes::ENCIRCLE, "encircle"),
    (Attributes::OVERLINE, "overline"),
];

/// SGR code for each attribute.
const SGR_CODES: &[(Attributes, u8)] = &[
    (Attributes::BOLD, 1),
    (Attributes::DIM, 2),
    (Attributes::ITALIC, 3),
    (Attributes::UNDERLINE, 4),
    (Attributes::BLINK, 5),
    (Attributes::BLINK2, 6),
    (Attributes::REVERSE, 7),
    (Attributes::CONCEAL, 8),
    (Attributes::STRIKE, 9),
    (Attributes::UNDERLINE2, 21),
    (Attributes::FRAME, 51),
    (Attributes::ENCIRCLE, 52),
    (Attributes::OVERLINE, 53),
];

/// Error raised when a style descriptor string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown style attribute: {0}")]
    UnknownAttribute(String),

    #[error("expected a color after 'on'")]
    MissingBackground,

    #[error("expected a target after 'link'")]
    MissingLinkTarget,

    #[error("expected an attribute after 'not'")]
    MissingAttribute,
}

/// A style descriptor: text attributes, an optional foreground and
/// background color, and an optional hyperlink target.
///
/// Styles round-trip through their canonical token string: attribute words
/// in a fixed order, then the foreground color, then `on <color>` for the
/// background, then `link <target>`. The empty style formats as `none`.
///
/// ```
/// use tintbox_style::Style;
///
/// let style: Style = "bold #000000 on #d73a49".parse().unwrap();
/// assert_eq!(style.to_string(), "bold #000000 on #d73a49");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    attributes: Attributes,
    color: Option<Color>,
    bgcolor: Option<Color>,
    link: Option<String>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, flag: Attributes, on: bool) -> Self {
        self.attributes.set(flag, on);
        self
    }

    pub fn bold(self, on: bool) -> Self {
        self.set(Attributes::BOLD, on)
    }

    pub fn dim(self, on: bool) -> Self {
        self.set(Attributes::DIM, on)
    }

    pub fn italic(self, on: bool) -> Self {
        self.set(Attributes::ITALIC, on)
    }

    pub fn underline(self, on: bool) -> Self {
        self.set(Attributes::UNDERLINE, on)
    }

    pub fn underline2(self, on: bool) -> Self {
        self.set(Attributes::UNDERLINE2, on)
    }

    pub fn blink(self, on: bool) -> Self {
        self.set(Attributes::BLINK, on)
    }

    pub fn blink2(self, on: bool) -> Self {
        self.set(Attributes::BLINK2, on)
    }

    pub fn reverse(self, on: bool) -> Self {
        self.set(Attributes::REVERSE, on)
    }

    pub fn conceal(self, on: bool) -> Self {
        self.set(Attributes::CONCEAL, on)
    }

    pub fn strike(self, on: bool) -> Self {
        self.set(Attributes::STRIKE, on)
    }

    pub fn frame(self, on: bool) -> Self {
        self.set(Attributes::FRAME, on)
    }

    pub fn encircle(self, on: bool) -> Self {
        self.set(Attributes::ENCIRCLE, on)
    }

    pub fn overline(self, on: bool) -> Self {
        self.set(Attributes::OVERLINE, on)
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the background color.
    pub fn on(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Set the hyperlink target.
    pub fn with_link(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }

    /// The attribute flags set on this style.
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// The foreground color, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// The background color, if any.
    pub fn bgcolor(&self) -> Option<&Color> {
        self.bgcolor.as_ref()
    }

    /// The hyperlink target, if any.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// True if no attribute, color, or link is set.
    pub fn is_plain(&self) -> bool {
        self.attributes.is_empty()
            && self.color.is_none()
            && self.bgcolor.is_none()
            && self.link.is_none()
    }

    /// Apply this style to `text`, producing an ANSI-escaped string.
    ///
    /// Hyperlinks use the OSC 8 sequence; everything else is a single SGR
    /// sequence closed by a reset.
    pub fn render(&self, text: &str) -> String {
        let mut codes: Vec<String> = SGR_CODES
            .iter()
            .filter(|(flag, _)| self.attributes.contains(*flag))
            .map(|(_, code)| code.to_string())
            .collect();
        if let Some(color) = &self.color {
            codes.push(color.fg_code());
        }
        if let Some(bgcolor) = &self.bgcolor {
            codes.push(bgcolor.bg_code());
        }

        let mut out = if codes.is_empty() {
            text.to_string()
        } else {
            format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
        };
        if let Some(link) = &self.link {
            out = format!("\x1b]8;;{link}\x1b\\{out}\x1b]8;;\x1b\\");
        }
        out
    }
}

fn attribute_word(word: &str) -> Option<Attributes> {
    ATTRIBUTE_WORDS
        .iter()
        .find(|(known, _)| *known == word)
        .map(|(_, flag)| *flag)
}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::default();
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "none" {
            return Ok(style);
        }
        let mut words = trimmed.split_whitespace();
        while let Some(word) = words.next() {
            match word {
                "on" => {
                    let token = words.next().ok_or(StyleParseError::MissingBackground)?;
                    style.bgcolor = Some(Color::parse(token)?);
                }
                "link" => {
                    let target = words.next().ok_or(StyleParseError::MissingLinkTarget)?;
                    style.link = Some(target.to_string());
                }
                "not" => {
                    let token = words.next().ok_or(StyleParseError::MissingAttribute)?;
                    let flag = attribute_word(token)
                        .ok_or_else(|| StyleParseError::UnknownAttribute(token.to_string()))?;
                    style.attributes.remove(flag);
                }
                _ => {
                    if let Some(flag) = attribute_word(word) {
                        style.attributes.insert(flag);
                    } else {
                        style.color = Some(Color::parse(word)?);
                    }
                }
            }
        }
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("none");
        }
        let mut words: Vec<String> = CANONICAL_WORDS
            .iter()
            .filter(|(flag, _)| self.attributes.contains(*flag))
            .map(|(_, word)| word.to_string())
            .collect();
        if let Some(color) = &self.color {
            words.push(color.to_string());
        }
        if let Some(bgcolor) = &self.bgcolor {
            words.push(format!("on {bgcolor}"));
        }
        if let Some(link) = &self.link {
            words.push(format!("link {link}"));
        }
        f.write_str(&words.join(" "))
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let style: Style = "bold rgb(255,85,85)".parse().unwrap();
        assert!(style.attributes().contains(Attributes::BOLD));
        assert_eq!(style.color(), Some(&Color::Rgb(255, 85, 85)));
        assert_eq!(style.bgcolor(), None);

        let style: Style = "dim #383b3d".parse().unwrap();
        assert!(style.attributes().contains(Attributes::DIM));
        assert_eq!(style.color(), Some(&Color::Rgb(0x38, 0x3b, 0x3d)));
    }

    #[test]
    fn test_parse_background_and_link() {
        let style: Style = "bold #000000 on #d73a49 link https://example.com"
            .parse()
            .unwrap();
        assert_eq!(style.color(), Some(&Color::Rgb(0, 0, 0)));
        assert_eq!(style.bgcolor(), Some(&Color::Rgb(0xd7, 0x3a, 0x49)));
        assert_eq!(style.link(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_none_and_empty() {
        assert_eq!("none".parse::<Style>().unwrap(), Style::new());
        assert_eq!("".parse::<Style>().unwrap(), Style::new());
        assert_eq!("   ".parse::<Style>().unwrap(), Style::new());
    }

    #[test]
    fn test_parse_not() {
        let style: Style = "bold not bold italic".parse().unwrap();
        assert!(!style.attributes().contains(Attributes::BOLD));
        assert!(style.attributes().contains(Attributes::ITALIC));
        assert!("not".parse::<Style>().is_err());
        assert!("not purpleish".parse::<Style>().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!("bold flashy".parse::<Style>().is_err());
        assert!("on".parse::<Style>().is_err());
        assert!("link".parse::<Style>().is_err());
    }

    #[test]
    fn test_display_canonical_order() {
        let style = Style::new()
            .overline(true)
            .bold(true)
            .fg(Color::Rgb(255, 85, 85));
        assert_eq!(style.to_string(), "bold overline #ff5555");
        assert_eq!(Style::new().to_string(), "none");
    }

    #[test]
    fn test_roundtrip() {
        for source in [
            "bold rgb(255,85,85)",
            "dim #383b3d",
            "bold #000000 on #d73a49",
            "reverse italic",
            "bold underline red link https://example.com",
            "none",
        ] {
            let style: Style = source.parse().unwrap();
            let reparsed: Style = style.to_string().parse().unwrap();
            assert_eq!(style, reparsed, "round-trip failed for {source:?}");
        }
    }

    #[test]
    fn test_short_aliases() {
        let style: Style = "b i u".parse().unwrap();
        assert!(style.attributes().contains(Attributes::BOLD));
        assert!(style.attributes().contains(Attributes::ITALIC));
        assert!(style.attributes().contains(Attributes::UNDERLINE));
    }

    #[test]
    fn test_render_sgr() {
        let style = Style::new().bold(true).fg(Color::Rgb(255, 85, 85));
        assert_eq!(style.render("x"), "\x1b[1;38;2;255;85;85mx\x1b[0m");
        assert_eq!(Style::new().render("x"), "x");
    }

    #[test]
    fn test_render_link() {
        let style = Style::new().with_link("https://example.com");
        assert_eq!(
            style.render("x"),
            "\x1b]8;;https://example.com\x1b\\x\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn test_serde_string_form() {
        let style: Style = "bold #000000 on #d73a49".parse().unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, "\"bold #000000 on #d73a49\"");
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
        assert!(serde_json::from_str::<Style>("\"bold flashy\"").is_err());
    }
}
