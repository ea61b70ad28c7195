//! Documentation view models for Swagger 2.0 documents
//!
//! This crate turns a parsed, dereferenced `Document` into a `DocumentView`:
//! one flattened `OperationView` per (path, method) pair with every
//! inheritance and merge decision already made, so renderers only display.
//!
//! ## Resolution rules
//! - **Parameters**: path-level parameters are inherited; an operation
//!   parameter with the same `name` and `in` replaces the inherited one.
//! - **consumes / produces / schemes**: operation values win when declared
//!   (even empty), otherwise the document value is used and marked as a
//!   fallback.
//! - **Responses**: kept in declaration order.
//! - **externalDocs**: link text is the description, or the URL without one.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_docgen_view::{build, ViewModelBuilder, BuildOptions, MethodOrder};
//!
//! let view = build(&document)?;
//!
//! let builder = ViewModelBuilder::new(
//!     BuildOptions::default().with_method_order(MethodOrder::Alphabetical),
//! );
//! let view = builder.build(&document)?;
//! ```

pub mod defaults;
pub mod external_docs;
pub mod parameters;
pub mod responses;

mod builder;
mod options;
mod sink;
mod view;

pub use builder::{html_id, ViewModelBuilder};
pub use options::{BuildOptions, MethodOrder};
pub use sink::{publish, OutputFormat, SerializingSink, ViewSink};
pub use view::{DocumentView, ExternalDocsLink, OperationView, ResolvedValues, ResponseView};

use swagger_docgen_common::{Document, ValidationError};

/// Build a view model with default options
pub fn build(document: &Document) -> Result<DocumentView, ValidationError> {
    ViewModelBuilder::default().build(document)
}
