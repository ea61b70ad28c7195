//! Swagger document loading
//!
//! This crate reads Swagger 2.0 documents from JSON or YAML into the
//! `Document` model that the view-model builder consumes.
//!
//! `$ref` pointers are not resolved here: documents are expected to be
//! dereferenced already.

pub mod swagger;

pub use swagger::{SourceFormat, SwaggerParser};
