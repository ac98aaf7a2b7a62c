//! Styled text made of spans

use unicode_width::UnicodeWidthStr;

use crate::style::Style;

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    /// An unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// A styled span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width of this span's content.
    pub fn width(&self) -> usize {
        self.content.width()
    }
}

/// A line of text made of styled spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub spans: Vec<Span>,
}

impl Text {
    /// Unstyled text.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    /// Text rendered entirely in one style.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    /// Build text from a list of spans.
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The text with all styling stripped.
    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .map(|span| span.content.as_str())
            .collect()
    }

    /// Display width of the plain text.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Render to a string, with or without ANSI styling.
    pub fn render(&self, color: bool) -> String {
        self.spans
            .iter()
            .map(|span| {
                if color {
                    span.style.render(&span.content)
                } else {
                    span.content.clone()
                }
            })
            .collect()
    }
}
