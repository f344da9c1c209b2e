//! # kafta-core
//!
//! Configuration and schema registry plumbing for the kafta CLI.
//!
//! This crate provides:
//! - The kaftaconfig store at `~/.kafta/config` (create, load, persist)
//! - Active context resolution and context management
//! - A subjects-only schema registry client
//!
//! ## Modules
//!
//! - [`configuration`]: Configuration loading, persistence and context selection
//! - [`schema`]: Schema registry transport and subject listing

pub mod configuration;
pub mod schema;
