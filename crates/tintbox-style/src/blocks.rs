//! Renderable blocks: tables and panels

use crate::text::Text;

/// A table of styled cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Text>>,
    pub show_header: bool,
    pub show_lines: bool,
    pub boxed: bool,
}

impl Table {
    pub fn new() -> Self {
        Self {
            show_header: true,
            ..Self::default()
        }
    }

    /// Set the table title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw a box around the table.
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    /// Draw a rule between rows.
    pub fn with_lines(mut self) -> Self {
        self.show_lines = true;
        self
    }

    /// Hide the header row.
    pub fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    /// Add a column with the given header.
    pub fn add_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
    }

    /// Add a row of cells.
    pub fn add_row(&mut self, cells: Vec<Text>) {
        self.rows.push(cells);
    }
}

/// A titled panel of text lines.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub title: Option<String>,
    pub lines: Vec<Text>,
}

impl Panel {
    pub fn new(lines: Vec<Text>) -> Self {
        Self { title: None, lines }
    }

    /// Set the panel title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A renderable block, consumed by [`crate::Console`].
#[derive(Debug, Clone)]
pub enum Block {
    Table(Table),
    Panel(Panel),
}
