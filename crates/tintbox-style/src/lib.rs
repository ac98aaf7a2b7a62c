//! Tintbox style descriptors and terminal rendering primitives
//!
//! This crate owns the style-descriptor grammar used by the tintbox theme
//! system (parsing, canonical formatting, equality, and ANSI rendering),
//! plus the renderable block model (styled text, tables, panels) and a
//! [`Console`] sink that prints blocks to any writer.

pub mod blocks;
pub mod color;
pub mod console;
pub mod style;
pub mod text;

pub use blocks::{Block, Panel, Table};
pub use color::Color;
pub use console::Console;
pub use style::{Attributes, Style, StyleParseError};
pub use text::{Span, Text};
