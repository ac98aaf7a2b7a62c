//! Console sink rendering blocks to any writer

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::blocks::{Block, Panel, Table};
use crate::style::Style;
use crate::text::Text;

/// Renders a sequence of [`Block`]s to an output sink.
///
/// Color output is a plain on/off switch; there is no terminal capability
/// probing here.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// A console writing to stdout with color enabled.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// A console writing to `out` with color enabled.
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// A console with an explicit color switch.
    pub fn with_color(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consume the console and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a sequence of blocks.
    pub fn print(&mut self, blocks: &[Block]) -> io::Result<()> {
        for block in blocks {
            match block {
                Block::Table(table) => self.print_table(table)?,
                Block::Panel(panel) => self.print_panel(panel)?,
            }
        }
        Ok(())
    }

    fn print_table(&mut self, table: &Table) -> io::Result<()> {
        let columns = table
            .columns
            .len()
            .max(table.rows.iter().map(Vec::len).max().unwrap_or(0));
        if columns == 0 {
            return Ok(());
        }

        let mut widths = vec![0usize; columns];
        for (i, name) in table.columns.iter().enumerate() {
            widths[i] = widths[i].max(name.width());
        }
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let header: Vec<Text> = table
            .columns
            .iter()
            .map(|name| Text::styled(name.clone(), Style::new().bold(true)))
            .collect();

        if table.boxed {
            // One space of padding either side of every cell
            let total: usize = widths.iter().map(|w| w + 2).sum::<usize>() + columns + 1;
            if let Some(title) = &table.title {
                let pad = total.saturating_sub(title.width()) / 2;
                writeln!(self.out, "{}{}", " ".repeat(pad), title)?;
            }
            self.rule(&widths, "┌", "┬", "┐")?;
            if table.show_header {
                self.boxed_row(&header, &widths)?;
                self.rule(&widths, "├", "┼", "┤")?;
            }
            for (i, row) in table.rows.iter().enumerate() {
                if i > 0 && table.show_lines {
                    self.rule(&widths, "├", "┼", "┤")?;
                }
                self.boxed_row(row, &widths)?;
            }
            self.rule(&widths, "└", "┴", "┘")?;
        } else {
            if let Some(title) = &table.title {
                writeln!(self.out, "{title}")?;
            }
            if table.show_header {
                self.bare_row(&header, &widths)?;
            }
            for row in &table.rows {
                self.bare_row(row, &widths)?;
            }
        }
        Ok(())
    }

    fn rule(&mut self, widths: &[usize], left: &str, mid: &str, right: &str) -> io::Result<()> {
        let line: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        writeln!(self.out, "{left}{}{right}", line.join(mid))
    }

    fn boxed_row(&mut self, cells: &[Text], widths: &[usize]) -> io::Result<()> {
        let empty = Text::default();
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).unwrap_or(&empty);
            line.push_str("│ ");
            line.push_str(&cell.render(self.color));
            line.push_str(&" ".repeat(width - cell.width() + 1));
        }
        line.push('│');
        writeln!(self.out, "{line}")
    }

    fn bare_row(&mut self, cells: &[Text], widths: &[usize]) -> io::Result<()> {
        let empty = Text::default();
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).unwrap_or(&empty);
            line.push_str(&cell.render(self.color));
            if i + 1 < widths.len() {
                line.push_str(&" ".repeat(width - cell.width() + 2));
            }
        }
        writeln!(self.out, "{}", line.trim_end())
    }

    fn print_panel(&mut self, panel: &Panel) -> io::Result<()> {
        let title_width = panel.title.as_deref().map(UnicodeWidthStr::width).unwrap_or(0);
        let width = panel
            .lines
            .iter()
            .map(Text::width)
            .max()
            .unwrap_or(0)
            .max(title_width + 1);

        match &panel.title {
            Some(title) => writeln!(
                self.out,
                "┌─ {title} {}┐",
                "─".repeat(width - title.width() - 1)
            )?,
            None => writeln!(self.out, "┌{}┐", "─".repeat(width + 2))?,
        }
        for line in &panel.lines {
            writeln!(
                self.out,
                "│ {}{} │",
                line.render(self.color),
                " ".repeat(width - line.width())
            )?;
        }
        writeln!(self.out, "└{}┘", "─".repeat(width + 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Span;

    fn render(blocks: &[Block]) -> String {
        let mut console = Console::with_color(Vec::new(), false);
        console.print(blocks).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_bare_table_layout() {
        let mut table = Table::new();
        table.add_column("Theme");
        table.add_column("Tags");
        table.add_row(vec![Text::raw("dark"), Text::raw("dark, mono")]);
        table.add_row(vec![Text::raw("light"), Text::raw("")]);
        let out = render(&[Block::Table(table)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Theme  Tags");
        assert_eq!(lines[1], "dark   dark, mono");
        assert_eq!(lines[2], "light");
    }

    #[test]
    fn test_boxed_table_layout() {
        let mut table = Table::new().boxed().with_lines().with_title("t");
        table.add_column("a");
        table.add_row(vec![Text::raw("xx")]);
        table.add_row(vec![Text::raw("y")]);
        let out = render(&[Block::Table(table)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "┌────┐");
        assert_eq!(lines[2], "│ a  │");
        assert_eq!(lines[3], "├────┤");
        assert_eq!(lines[4], "│ xx │");
        assert_eq!(lines[5], "├────┤");
        assert_eq!(lines[6], "│ y  │");
        assert_eq!(lines[7], "└────┘");
    }

    #[test]
    fn test_panel_layout() {
        let panel = Panel::new(vec![
            Text::raw("alpha beta"),
            Text::from_spans(vec![Span::raw("x")]),
        ])
        .with_title("legend");
        let out = render(&[Block::Panel(panel)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "┌─ legend ───┐");
        assert_eq!(lines[1], "│ alpha beta │");
        assert_eq!(lines[2], "│ x          │");
        assert_eq!(lines[3], "└────────────┘");
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        let out = render(&[Block::Table(Table::new())]);
        assert!(out.is_empty());
    }
}
