//! Interactive terminal UI for `cloudterm`.
//!
//! [`App`] owns the navigator, the welcome page and the notification area.
//! The remaining submodules split its event loop, key handling and rendering,
//! plus the reusable widgets, pages and themes they draw with.

mod actions;
pub mod components;
pub mod input;
pub mod pages;
mod render;
mod runtime;
mod state;
pub mod style;

pub use runtime::run;
pub use state::{App, AppConfig};
