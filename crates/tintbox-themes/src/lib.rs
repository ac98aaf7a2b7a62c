//! Tintbox theme management
//!
//! This crate manages named presentation themes: mappings from semantic
//! style names ("error", "warning", "filename") to [`tintbox_style::Style`]
//! descriptors, persisted as small human-editable `.theme` files, with
//! merge and directory-reconciliation semantics on top:
//!
//! - [`Theme`] owns one theme's identity, tags, and declared styles, and
//!   knows how to serialize, deserialize, and merge itself.
//! - [`ThemeManager`] owns a named collection of themes and keeps it in
//!   sync with a directory of theme files.

pub mod builtin;
pub mod conf;
pub mod error;
pub mod manager;
pub mod theme;

pub use error::{Result, ThemeError};
pub use manager::{ThemeManager, THEME_FILE_EXT};
pub use theme::{attribute_str, Theme, SAMPLE_TEXT};
