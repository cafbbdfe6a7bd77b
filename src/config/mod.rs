//! Application configuration.
//!
//! Loaded from a TOML file once at startup. A missing file yields the
//! defaults; a malformed file is an error rather than a silent reset.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
