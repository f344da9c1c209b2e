//! Configuration loading and management.
//!
//! This module owns the kaftaconfig file (`~/.kafta/config`): it creates the
//! file at startup, loads it (or a default), persists changes and resolves
//! which context is active.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{ConfigError, ConfigInitError, ConfigResult};
pub use store::Configuration;
