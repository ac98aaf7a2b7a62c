//! End-to-end workflows: reconcile a theme directory, list and preview
//! themes through a console, and round-trip user edits between runs.

use std::fs;

use tempfile::TempDir;
use tintbox_style::Console;
use tintbox_themes::builtin::builtin_themes;
use tintbox_themes::{ThemeManager, SAMPLE_TEXT, THEME_FILE_EXT};

fn console_output(render: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
    let mut console = Console::with_color(Vec::new(), false);
    render(&mut console);
    String::from_utf8(console.into_inner()).unwrap()
}

#[test]
fn test_first_run_seeds_directory_then_preserves_edits() {
    let theme_dir = TempDir::new().unwrap();

    // First run creates the default theme files
    let manager =
        ThemeManager::with_theme_dir(theme_dir.path(), builtin_themes(), false, false).unwrap();
    let dark_path = theme_dir.path().join(format!("dark.{THEME_FILE_EXT}"));
    assert!(dark_path.exists());
    assert_eq!(manager.get("dark").unwrap().path(), Some(dark_path.as_path()));

    // The user customizes a style in the file
    let edited = fs::read_to_string(&dark_path)
        .unwrap()
        .replace("hidden = dim #383b3d", "hidden = dim #505050");
    fs::write(&dark_path, edited).unwrap();

    // The next run picks the customization up without rewriting the file
    let manager =
        ThemeManager::with_theme_dir(theme_dir.path(), builtin_themes(), false, false).unwrap();
    assert_eq!(
        manager.get("dark").unwrap().styles()["hidden"].to_string(),
        "dim #505050"
    );
    assert!(fs::read_to_string(&dark_path).unwrap().contains("#505050"));
}

#[test]
fn test_list_themes_console_output() {
    let theme_dir = TempDir::new().unwrap();
    let manager =
        ThemeManager::with_theme_dir(theme_dir.path(), builtin_themes(), false, false).unwrap();

    let output = console_output(|console| {
        manager.list_themes(console, true, None).unwrap();
    });
    for expected in ["Theme", "Description", "Tags", "Path"] {
        assert!(output.contains(expected), "missing column {expected}");
    }
    for expected in ["dark", "Monochromatic theme", "mono, colorblind"] {
        assert!(output.contains(expected), "missing cell {expected}");
    }
    assert!(output.contains(&format!("dark.{THEME_FILE_EXT}")));

    let filtered = console_output(|console| {
        manager.list_themes(console, false, Some(&["light"])).unwrap();
    });
    assert!(filtered.contains("light"));
    assert!(!filtered.contains("dark"));
    assert!(!filtered.contains("Path"));
}

#[test]
fn test_preview_theme_console_output() {
    let manager = ThemeManager::new(builtin_themes());
    let output = console_output(|console| {
        ThemeManager::preview_theme(console, manager.get("dark").unwrap(), None, true).unwrap();
    });
    assert!(output.contains("Theme: dark"));
    assert!(output.contains(SAMPLE_TEXT));
    assert!(output.contains("attributes legend"));
    assert!(output.contains("b-------------"));

    let output = console_output(|console| {
        ThemeManager::preview_theme(
            console,
            manager.get("dark").unwrap(),
            Some("Join the dark side"),
            true,
        )
        .unwrap();
    });
    assert!(output.contains("Join the dark side"));
}

#[test]
fn test_remove_theme_deletes_file_end_to_end() {
    let theme_dir = TempDir::new().unwrap();
    let mut manager =
        ThemeManager::with_theme_dir(theme_dir.path(), builtin_themes(), false, false).unwrap();
    let mono_path = theme_dir.path().join(format!("mono.{THEME_FILE_EXT}"));
    assert!(mono_path.exists());

    let removed = manager.remove("mono").unwrap();
    assert_eq!(removed.name(), "mono");
    assert!(!mono_path.exists());
    assert!(manager.get("mono").is_err());

    // A later run no longer sees it
    let manager =
        ThemeManager::with_theme_dir(theme_dir.path(), vec![], false, false).unwrap();
    assert!(manager.get("mono").is_err());
    assert!(manager.get("dark").is_ok());
}
