//! Configuration for the catalog view.
//!
//! Values come from `~/.config/dexview/config.toml` when it exists,
//! otherwise from built-in defaults. Command line flags are applied on
//! top through [`Overrides`] before validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, Overrides, ViewConfig};
