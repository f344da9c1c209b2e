//! Models for schema registry responses.

/// Body of `GET /subjects`: subject names in the order the registry returned them.
pub type Subjects = Vec<String>;
