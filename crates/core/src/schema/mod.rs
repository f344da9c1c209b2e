//! Schema registry client.
//!
//! Only subject listing is implemented. Requests go through a
//! [`RegistryTransport`]: [`HttpTransport`] for the real registry,
//! [`mock::MockTransport`] for tests.

pub mod error;
pub mod mock;
pub mod subjects;
pub mod transport;

pub use error::{SchemaError, SchemaResult};
pub use subjects::{list_subjects, list_subjects_with, SUBJECTS_PATH};
pub use transport::{
    build_get_request_schema_registry, HttpTransport, RegistryTransport, ResponseBody,
};
