//! Minimal section/key-value config documents
//!
//! Theme files are small INI-style documents: `[section]` headers followed
//! by `key = value` lines. Parsing preserves section and entry order,
//! ignores comments and blank lines, and keeps sections it does not know
//! about, so hand-edited files survive a read untouched.

use crate::error::{Result, ThemeError};

/// One `[name]` section and its entries, in file order.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append an entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Iterate entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An ordered list of sections.
#[derive(Debug, Clone, Default)]
pub struct ConfDocument {
    sections: Vec<Section>,
}

impl ConfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from source text.
    pub fn parse(source: &str) -> Result<Self> {
        let mut doc = Self::new();
        for (number, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                doc.sections.push(Section::new(name.trim()));
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ThemeError::InvalidFormat(format!(
                    "line {}: expected 'key = value', got {line:?}",
                    number + 1
                )));
            };
            let Some(section) = doc.sections.last_mut() else {
                return Err(ThemeError::InvalidFormat(format!(
                    "line {}: entry outside of any section",
                    number + 1
                )));
            };
            section.set(key.trim(), value.trim());
        }
        Ok(doc)
    }

    /// The section named `name`, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Append a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Render back to source text, sections separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in section.entries() {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
[metadata]
name = dark
description = Dark mode theme
tags = dark
inherit = True

# a comment
[styles]
error = bold rgb(255,85,85)
hidden = dim #383b3d
";

    #[test]
    fn test_parse_sections_and_entries() {
        let doc = ConfDocument::parse(SOURCE).unwrap();
        let metadata = doc.section("metadata").unwrap();
        assert_eq!(metadata.get("name"), Some("dark"));
        assert_eq!(metadata.get("description"), Some("Dark mode theme"));
        assert_eq!(metadata.get("inherit"), Some("True"));
        let styles = doc.section("styles").unwrap();
        assert_eq!(styles.get("error"), Some("bold rgb(255,85,85)"));
        assert_eq!(styles.entries().count(), 2);
        assert!(doc.section("missing").is_none());
    }

    #[test]
    fn test_unknown_sections_tolerated() {
        let doc = ConfDocument::parse("[metadata]\nname = x\n\n[extra]\nfoo = bar\n").unwrap();
        assert_eq!(doc.section("extra").unwrap().get("foo"), Some("bar"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConfDocument::parse("name = dark\n").is_err());
        assert!(ConfDocument::parse("[metadata]\njust some words\n").is_err());
    }

    #[test]
    fn test_render_roundtrip() {
        let mut doc = ConfDocument::new();
        let mut metadata = Section::new("metadata");
        metadata.set("name", "dark");
        metadata.set("inherit", "True");
        doc.push(metadata);
        let mut styles = Section::new("styles");
        styles.set("hidden", "dim #383b3d");
        doc.push(styles);

        let rendered = doc.render();
        assert_eq!(
            rendered,
            "[metadata]\nname = dark\ninherit = True\n\n[styles]\nhidden = dim #383b3d\n"
        );
        let back = ConfDocument::parse(&rendered).unwrap();
        assert_eq!(back.section("styles").unwrap().get("hidden"), Some("dim #383b3d"));
    }

    #[test]
    fn test_value_containing_equals() {
        let doc = ConfDocument::parse("[metadata]\ndescription = a = b\n").unwrap();
        assert_eq!(doc.section("metadata").unwrap().get("description"), Some("a = b"));
    }
}
