//! Theme entity: identity, metadata, and declared styles

use std::collections::BTreeMap;
use std::fs;
use std::ops::{BitOr, BitOrAssign};
use std::path::{Path, PathBuf};

use tintbox_style::{Attributes, Block, Color, Panel, Span, Style, Table, Text};

use crate::conf::{ConfDocument, Section};
use crate::error::{Result, ThemeError};

/// Sample text rendered in each style when previewing a theme.
pub const SAMPLE_TEXT: &str = "The quick brown fox...";

/// A named, taggable bundle of style declarations with an optional
/// on-disk location.
///
/// A theme distinguishes the styles it *declares* (`style_names`, captured
/// from the style mapping at construction) from the full style mapping,
/// which may carry additional inherited entries. Only declared styles are
/// serialized.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    description: String,
    tags: Vec<String>,
    style_names: Vec<String>,
    styles: BTreeMap<String, Style>,
    inherit: bool,
    path: Option<PathBuf>,
}

impl Theme {
    /// Create a theme. The keys of `styles` become the declared style
    /// names.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        styles: BTreeMap<String, Style>,
        inherit: bool,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags,
            style_names: styles.keys().cloned().collect(),
            styles,
            inherit,
            path: None,
        }
    }

    /// Assign a path at construction time.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The style names this theme declares, in declaration order.
    pub fn style_names(&self) -> &[String] {
        &self.style_names
    }

    /// The full style mapping, declared and inherited entries alike.
    pub fn styles(&self) -> &BTreeMap<String, Style> {
        &self.styles
    }

    pub fn inherit(&self) -> bool {
        self.inherit
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// The contents of a config file for this theme.
    ///
    /// Only declared style names are emitted, sorted alphabetically; a
    /// declared name with no entry in the style mapping is skipped.
    pub fn config(&self) -> String {
        let mut doc = ConfDocument::new();
        let mut metadata = Section::new("metadata");
        metadata.set("name", self.name.as_str());
        metadata.set("description", self.description.as_str());
        metadata.set("tags", self.tags.join(", "));
        metadata.set("inherit", if self.inherit { "True" } else { "False" });
        doc.push(metadata);

        let mut styles = Section::new("styles");
        for (name, style) in &self.styles {
            if self.style_names.iter().any(|declared| declared == name) {
                styles.set(name.as_str(), style.to_string());
            }
        }
        doc.push(styles);
        doc.render()
    }

    /// Write this theme to `path`, overwriting whatever is there.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.config())?;
        Ok(())
    }

    /// Write this theme to its path.
    pub fn save(&self, overwrite: bool) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ThemeError::NoPath(self.name.clone()))?;
        if !overwrite && path.exists() {
            return Err(ThemeError::AlreadyExists {
                name: self.name.clone(),
                path: path.clone(),
            });
        }
        self.to_file(path)
    }

    /// Re-read this theme from its path, replacing all in-memory data.
    pub fn load(&mut self) -> Result<()> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| ThemeError::NoPath(self.name.clone()))?;
        if !path.exists() {
            return Err(ThemeError::FileNotFound {
                name: self.name.clone(),
                path,
            });
        }
        *self = Theme::read(&path, true)?;
        Ok(())
    }

    /// Parse a theme from config-file text.
    ///
    /// `path` records where the text came from. A theme cannot force
    /// inheritance off once the file asked for it: the result inherits if
    /// either `inherit` or the stored flag is set.
    pub fn from_source(source: &str, path: Option<PathBuf>, inherit: bool) -> Result<Self> {
        let doc = ConfDocument::parse(source)?;

        let style_section = doc
            .section("styles")
            .ok_or_else(|| ThemeError::InvalidFormat("missing [styles] section".to_string()))?;
        let mut styles = BTreeMap::new();
        for (name, value) in style_section.entries() {
            let style: Style = value.parse().map_err(|err| {
                ThemeError::InvalidFormat(format!("style {name}: {err}"))
            })?;
            styles.insert(name.to_string(), style);
        }

        let metadata = doc
            .section("metadata")
            .ok_or_else(|| ThemeError::InvalidFormat("missing [metadata] section".to_string()))?;
        let name = metadata
            .get("name")
            .ok_or_else(|| ThemeError::InvalidFormat("missing theme name".to_string()))?;
        let description = metadata.get("description").unwrap_or_default();
        let tags: Vec<String> = match metadata.get("tags") {
            Some(field) if !field.is_empty() => {
                field.split(',').map(|tag| tag.trim().to_string()).collect()
            }
            _ => Vec::new(),
        };
        let stored_inherit = metadata
            .get("inherit")
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut theme = Theme::new(name, description, styles, inherit || stored_inherit, tags);
        theme.path = path;
        Ok(theme)
    }

    /// Read a theme from a config file.
    pub fn read(path: &Path, inherit: bool) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_source(&source, Some(path.to_path_buf()), inherit)
    }

    /// Merge `other`'s declared styles, tags, and description into this
    /// theme.
    ///
    /// With `overwrite_existing_styles` unset, a style this theme already
    /// declares keeps its value. Tags and declared names become the
    /// ordered union (this theme's first); the description is always
    /// replaced by `other`'s. Name and path are untouched.
    pub fn update(&mut self, other: &Theme, overwrite_existing_styles: bool) {
        for name in &other.style_names {
            if let Some(style) = other.styles.get(name) {
                if overwrite_existing_styles
                    || !self.style_names.iter().any(|declared| declared == name)
                {
                    self.styles.insert(name.clone(), style.clone());
                }
            }
        }
        self.tags = ordered_union(&self.tags, &other.tags);
        self.style_names = ordered_union(&self.style_names, &other.style_names);
        self.description = other.description.clone();
    }

    /// Merge `other` into this theme, always taking `other`'s styles.
    pub fn merge_from(&mut self, other: &Theme) {
        self.update(other, true);
    }

    /// Build a new theme combining this theme's declared styles with
    /// `other`'s, `other` winning on any style both declare.
    ///
    /// The result keeps this theme's name, inherit flag, and path, takes
    /// `other`'s description, and unions the tags in order.
    pub fn union(&self, other: &Theme) -> Theme {
        let mut styles: BTreeMap<String, Style> = self
            .styles
            .iter()
            .filter(|(name, _)| self.style_names.iter().any(|declared| declared == *name))
            .map(|(name, style)| (name.clone(), style.clone()))
            .collect();
        for name in &other.style_names {
            if let Some(style) = other.styles.get(name) {
                styles.insert(name.clone(), style.clone());
            }
        }
        let mut theme = Theme::new(
            self.name.clone(),
            other.description.clone(),
            styles,
            self.inherit,
            ordered_union(&self.tags, &other.tags),
        );
        theme.path = self.path.clone();
        theme
    }

    /// Renderable preview: one table row per declared style, then an
    /// attribute legend.
    pub fn preview(&self, sample_text: Option<&str>, show_path: bool) -> Vec<Block> {
        let mut title = format!("Theme: {}", self.name);
        if show_path {
            if let Some(path) = &self.path {
                title.push_str(&format!(" - {}", path.display()));
            }
        }
        let mut table = Table::new().boxed().with_lines().with_title(title);
        for column in ["style", "color", "color", "bgcolor", "bgcolor", "attributes", "example"] {
            table.add_column(column);
        }

        let sample = sample_text.unwrap_or(SAMPLE_TEXT);
        for name in &self.style_names {
            let Some(style) = self.styles.get(name) else {
                continue;
            };
            table.add_row(vec![
                Text::raw(name.clone()),
                Text::raw(color_id(style.color())),
                swatch(style.color()),
                Text::raw(color_id(style.bgcolor())),
                swatch(style.bgcolor()),
                attribute_text(style),
                Text::styled(sample, style.clone()),
            ]);
        }

        let legend = Panel::new(vec![
            legend_line(&[
                ("b", "bold"),
                ("d", "dim"),
                ("i", "italic"),
                ("u", "underline"),
                ("U", "double underline"),
                ("B", "blink"),
                ("2", "blink2"),
            ]),
            legend_line(&[
                ("r", "reverse"),
                ("c", "conceal"),
                ("s", "strike"),
                ("f", "frame"),
                ("e", "encircle"),
                ("o", "overline"),
                ("L", "Link"),
            ]),
        ])
        .with_title("attributes legend");

        vec![Block::Table(table), Block::Panel(legend)]
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.styles == other.styles
            && self.inherit == other.inherit
            && self.tags == other.tags
    }
}

impl BitOr for &Theme {
    type Output = Theme;

    fn bitor(self, rhs: &Theme) -> Theme {
        self.union(rhs)
    }
}

impl BitOr for Theme {
    type Output = Theme;

    fn bitor(self, rhs: Theme) -> Theme {
        self.union(&rhs)
    }
}

impl BitOrAssign<&Theme> for Theme {
    fn bitor_assign(&mut self, rhs: &Theme) {
        self.merge_from(rhs);
    }
}

/// `a` followed by the elements of `b` not already present.
fn ordered_union(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = a.to_vec();
    for item in b {
        if !out.iter().any(|existing| existing == item) {
            out.push(item.clone());
        }
    }
    out
}

fn color_id(color: Option<&Color>) -> String {
    color.map(Color::to_string).unwrap_or_else(|| "None".to_string())
}

fn swatch(color: Option<&Color>) -> Text {
    match color {
        Some(color) => Text::styled("█████", Style::new().fg(color.clone())),
        None => Text::raw("     "),
    }
}

/// The 14-flag attribute string for a style, one letter or dash per flag:
/// bold, dim, italic, underline, double underline, blink, blink2, reverse,
/// conceal, strike, frame, encircle, overline, link.
pub fn attribute_str(style: &Style) -> String {
    attribute_pairs(style)
        .iter()
        .map(|(letter, on)| if *on { *letter } else { '-' })
        .collect()
}

fn attribute_pairs(style: &Style) -> [(char, bool); 14] {
    let attrs = style.attributes();
    [
        ('b', attrs.contains(Attributes::BOLD)),
        ('d', attrs.contains(Attributes::DIM)),
        ('i', attrs.contains(Attributes::ITALIC)),
        ('u', attrs.contains(Attributes::UNDERLINE)),
        ('U', attrs.contains(Attributes::UNDERLINE2)),
        ('B', attrs.contains(Attributes::BLINK)),
        ('2', attrs.contains(Attributes::BLINK2)),
        ('r', attrs.contains(Attributes::REVERSE)),
        ('c', attrs.contains(Attributes::CONCEAL)),
        ('s', attrs.contains(Attributes::STRIKE)),
        ('f', attrs.contains(Attributes::FRAME)),
        ('e', attrs.contains(Attributes::ENCIRCLE)),
        ('o', attrs.contains(Attributes::OVERLINE)),
        ('L', style.link().is_some()),
    ]
}

fn attribute_text(style: &Style) -> Text {
    let bold = Style::new().bold(true);
    let spans = attribute_pairs(style)
        .iter()
        .map(|(letter, on)| {
            if *on {
                Span::styled(letter.to_string(), bold.clone())
            } else {
                Span::raw("-")
            }
        })
        .collect();
    Text::from_spans(spans)
}

fn legend_line(items: &[(&str, &str)]) -> Text {
    let bold = Style::new().bold(true);
    let mut text = Text::default();
    for (i, (letter, name)) in items.iter().enumerate() {
        text.push(Span::styled(letter.to_string(), bold.clone()));
        if i + 1 < items.len() {
            text.push(Span::raw(format!(": {name}, ")));
        } else {
            text.push(Span::raw(format!(": {name}")));
        }
    }
    text
}
