//! Configuration loading and resolution.
//!
//! Default files, explicit `--config` files, `CLOUDTERM__*` environment
//! variables and CLI flags are merged in that order. [`load`] returns the
//! validated [`ResolvedConfig`] the binary starts the UI with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
