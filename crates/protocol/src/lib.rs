//! # kafta-protocol
//!
//! Data models shared by the kafta crates.
//!
//! This crate defines the serde structures used for:
//! - The kaftaconfig file (`~/.kafta/config`): contexts and connection settings
//! - Schema registry responses
//!
//! ## Modules
//!
//! - [`kaftaconfig_models`]: The persisted configuration and its contexts
//! - [`schema_models`]: Schema registry response bodies
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde
//! - No I/O: loading and writing live in `kafta-core`

pub mod kaftaconfig_models;
pub mod schema_models;

// Re-export all public types for convenience
pub use kaftaconfig_models::*;
pub use schema_models::*;
