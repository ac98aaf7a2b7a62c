//! Ready-made themes

use std::collections::BTreeMap;

use tintbox_style::{Color, Style};

use crate::theme::Theme;

/// Dark mode theme.
pub fn dark() -> Theme {
    Theme::new(
        "dark",
        "Dark mode theme",
        BTreeMap::from([
            (
                "hidden".to_string(),
                Style::new().dim(true).fg(Color::Rgb(0x38, 0x3b, 0x3d)),
            ),
            (
                "error".to_string(),
                Style::new().bold(true).fg(Color::Rgb(255, 85, 85)),
            ),
            (
                "filename".to_string(),
                Style::new().bold(true).fg(Color::Rgb(189, 147, 249)),
            ),
            (
                "filepath".to_string(),
                Style::new().bold(true).fg(Color::Rgb(80, 250, 123)),
            ),
            (
                "highlight".to_string(),
                Style::new()
                    .bold(true)
                    .fg(Color::Rgb(0, 0, 0))
                    .on(Color::Rgb(0xd7, 0x3a, 0x49)),
            ),
            (
                "num".to_string(),
                Style::new().bold(true).fg(Color::Rgb(139, 233, 253)),
            ),
            (
                "time".to_string(),
                Style::new().bold(true).fg(Color::Rgb(139, 233, 253)),
            ),
            (
                "warning".to_string(),
                Style::new().bold(true).fg(Color::Rgb(241, 250, 140)),
            ),
        ]),
        true,
        vec!["dark".to_string()],
    )
}

/// Light mode theme.
pub fn light() -> Theme {
    Theme::new(
        "light",
        "Light mode theme",
        BTreeMap::from([
            (
                "hidden".to_string(),
                Style::new().dim(true).fg(Color::Rgb(0x38, 0x3b, 0x3d)),
            ),
            (
                "error".to_string(),
                Style::new()
                    .bold(true)
                    .underline(true)
                    .italic(true)
                    .fg(Color::Rgb(0xb3, 0x1d, 0x28)),
            ),
            (
                "filename".to_string(),
                Style::new().bold(true).fg(Color::Rgb(0x6f, 0x42, 0xc1)),
            ),
            (
                "filepath".to_string(),
                Style::new().bold(true).fg(Color::Rgb(0x22, 0x86, 0x3a)),
            ),
            (
                "highlight".to_string(),
                Style::new()
                    .bold(true)
                    .fg(Color::Rgb(0xff, 0xff, 0xff))
                    .on(Color::Rgb(0xd7, 0x3a, 0x49)),
            ),
            (
                "num".to_string(),
                Style::new().bold(true).fg(Color::Rgb(0x00, 0x5c, 0xc5)),
            ),
            (
                "time".to_string(),
                Style::new().bold(true).fg(Color::Rgb(0x03, 0x2f, 0x62)),
            ),
            (
                "warning".to_string(),
                Style::new()
                    .bold(true)
                    .underline(true)
                    .italic(true)
                    .fg(Color::Rgb(0xe3, 0x62, 0x09)),
            ),
        ]),
        true,
        Vec::new(),
    )
}

/// Monochromatic theme, attributes only.
pub fn mono() -> Theme {
    Theme::new(
        "mono",
        "Monochromatic theme",
        BTreeMap::from([
            ("hidden".to_string(), Style::new().dim(true)),
            ("error".to_string(), Style::new().reverse(true).italic(true)),
            ("filename".to_string(), Style::new().bold(true)),
            (
                "filepath".to_string(),
                Style::new().bold(true).underline(true),
            ),
            (
                "highlight".to_string(),
                Style::new().reverse(true).italic(true),
            ),
            ("num".to_string(), Style::new().bold(true)),
            ("time".to_string(), Style::new().bold(true)),
            ("warning".to_string(), Style::new().bold(true).italic(true)),
        ]),
        true,
        vec!["mono".to_string(), "colorblind".to_string()],
    )
}

/// Plain theme with no styling at all.
pub fn plain() -> Theme {
    let names = [
        "hidden", "error", "filename", "filepath", "highlight", "num", "time", "warning",
    ];
    Theme::new(
        "plain",
        "Plain theme with no colors",
        names
            .iter()
            .map(|name| (name.to_string(), Style::new()))
            .collect(),
        true,
        vec!["colorblind".to_string()],
    )
}

/// All built-in themes.
pub fn builtin_themes() -> Vec<Theme> {
    vec![dark(), light(), mono(), plain()]
}
