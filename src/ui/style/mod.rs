//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the console. They are looked up
//! by name or alias, ignoring case.

pub mod theme;

pub use theme::{THEMES, Theme, ThemeDefinition, by_name, default_theme, names};
