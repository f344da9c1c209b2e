//! Common test utilities for kafta-core integration tests.
//!
//! - Fixtures: throwaway home directories and configurations
//! - A minimal HTTP server standing in for the schema registry

pub mod fixtures;
pub mod mock_registry;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_registry::*;
