//! Theme collection management and directory reconciliation

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tintbox_style::{Block, Console, Table, Text};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::theme::Theme;

/// File extension for persisted themes.
pub const THEME_FILE_EXT: &str = "theme";

/// Manages a named collection of [`Theme`]s, optionally synchronized with
/// a directory of theme files.
///
/// With a directory configured, construction reconciles the in-memory set
/// against disk: the first run seeds the directory with the supplied
/// defaults, later runs pick up whatever the user has edited, and the
/// `overwrite`/`update` flags force-reset files or field-merge new built-in
/// styles into customized ones.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    theme_dir: Option<PathBuf>,
    themes: BTreeMap<String, Theme>,
}

impl ThemeManager {
    /// A manager holding `themes` in memory, with no disk interaction.
    /// On duplicate names the last theme wins.
    pub fn new(themes: Vec<Theme>) -> Self {
        Self {
            theme_dir: None,
            themes: themes
                .into_iter()
                .map(|theme| (theme.name().to_string(), theme))
                .collect(),
        }
    }

    /// A manager reconciled against `theme_dir`.
    ///
    /// Every supplied theme gets its path assigned under the directory.
    /// With `overwrite` set, all in-memory themes are written out first and
    /// the directory is loaded afterwards (picking up extra on-disk
    /// themes); otherwise the directory is loaded first, so on-disk
    /// versions take precedence, and only missing files are written.
    /// `update` controls whether an on-disk theme field-merges into an
    /// in-memory one of the same name instead of replacing it.
    pub fn with_theme_dir(
        theme_dir: impl Into<PathBuf>,
        themes: Vec<Theme>,
        overwrite: bool,
        update: bool,
    ) -> Result<Self> {
        let theme_dir = theme_dir.into();
        let mut manager = Self::new(themes);
        for theme in manager.themes.values_mut() {
            let path = theme_dir.join(format!("{}.{THEME_FILE_EXT}", theme.name()));
            theme.set_path(path);
        }
        manager.theme_dir = Some(theme_dir);

        if overwrite {
            manager.write_themes(true)?;
            manager.load_themes(None, update)?;
        } else {
            manager.load_themes(None, update)?;
            manager.write_themes(update)?;
        }
        Ok(manager)
    }

    /// The configured theme directory, if any.
    pub fn theme_dir(&self) -> Option<&Path> {
        self.theme_dir.as_deref()
    }

    /// The managed themes.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Whether a theme of the given name is managed.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// The per-user default theme directory.
    pub fn default_theme_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ThemeError::NoDirectory)?;
        Ok(config_dir.join("tintbox").join("themes"))
    }

    /// Add a theme, writing its file if it does not exist yet (or
    /// unconditionally when a directory is configured and `overwrite` is
    /// set). The theme replaces any in-memory entry of the same name.
    pub fn add(&mut self, mut theme: Theme, overwrite: bool) -> Result<()> {
        if theme.path().is_none() {
            if let Some(theme_dir) = &self.theme_dir {
                theme.set_path(theme_dir.join(format!("{}.{THEME_FILE_EXT}", theme.name())));
            }
        }
        let write = (self.theme_dir.is_some() && overwrite)
            || theme.path().is_some_and(|path| !path.exists());
        if write {
            theme.save(overwrite)?;
        }
        self.themes.insert(theme.name().to_string(), theme);
        Ok(())
    }

    /// Remove a theme by name, deleting its backing file if present.
    pub fn remove(&mut self, name: &str) -> Result<Theme> {
        let path = self
            .themes
            .get(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?
            .path()
            .map(Path::to_path_buf);
        if let Some(path) = path {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        self.themes
            .remove(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    /// Get a theme by name.
    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    /// Get a theme by name for in-place modification.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Theme> {
        self.themes
            .get_mut(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    /// Load every theme file from `theme_dir`, or from the configured
    /// directory when none is given.
    ///
    /// An absent directory yields zero themes. A loaded theme replaces any
    /// in-memory entry of the same name, unless `update` is set, in which
    /// case it is field-merged into the existing entry without overwriting
    /// styles the entry already declares.
    pub fn load_themes(&mut self, theme_dir: Option<&Path>, update: bool) -> Result<()> {
        let theme_dir = theme_dir
            .map(Path::to_path_buf)
            .or_else(|| self.theme_dir.clone())
            .ok_or(ThemeError::NoDirectory)?;
        if !theme_dir.exists() {
            debug!(dir = %theme_dir.display(), "theme directory absent, nothing to load");
            return Ok(());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&theme_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == THEME_FILE_EXT)
            })
            .collect();
        paths.sort();

        let count = paths.len();
        for path in paths {
            let loaded = Theme::read(&path, true)?;
            let name = loaded.name().to_string();
            if update {
                if let Some(existing) = self.themes.get_mut(&name) {
                    existing.update(&loaded, false);
                    continue;
                }
            }
            self.themes.insert(name, loaded);
        }
        debug!(count, dir = %theme_dir.display(), "loaded themes");
        Ok(())
    }

    /// Write every managed theme to its path. Existing files are left
    /// alone unless `overwrite` is set.
    pub fn write_themes(&self, overwrite: bool) -> Result<()> {
        for theme in self.themes.values() {
            let path = theme
                .path()
                .ok_or_else(|| ThemeError::NoPath(theme.name().to_string()))?;
            if !path.exists() || overwrite {
                theme.save(overwrite)?;
            }
        }
        Ok(())
    }

    /// The tabular listing of managed themes, filtered to `theme_names`
    /// when given.
    pub fn list_table(&self, show_path: bool, theme_names: Option<&[&str]>) -> Table {
        let mut table = Table::new();
        table.add_column("Theme");
        table.add_column("Description");
        table.add_column("Tags");
        if show_path {
            table.add_column("Path");
        }
        for theme in self.themes.values() {
            if let Some(names) = theme_names {
                if !names.contains(&theme.name()) {
                    continue;
                }
            }
            let mut row = vec![
                Text::raw(theme.name()),
                Text::raw(theme.description()),
                Text::raw(theme.tags().join(", ")),
            ];
            if show_path {
                row.push(Text::raw(
                    theme
                        .path()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default(),
                ));
            }
            table.add_row(row);
        }
        table
    }

    /// Print the theme listing to a console.
    pub fn list_themes<W: Write>(
        &self,
        console: &mut Console<W>,
        show_path: bool,
        theme_names: Option<&[&str]>,
    ) -> Result<()> {
        console.print(&[Block::Table(self.list_table(show_path, theme_names))])?;
        Ok(())
    }

    /// Print a theme preview to a console.
    pub fn preview_theme<W: Write>(
        console: &mut Console<W>,
        theme: &Theme,
        sample_text: Option<&str>,
        show_path: bool,
    ) -> Result<()> {
        console.print(&theme.preview(sample_text, show_path))?;
        Ok(())
    }
}
