//! Swagger 2.0 document loader
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_docgen_parser::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("petstore.yaml")?;
//! let document = parser.into_document();
//! ```

mod parser;

pub use parser::{SourceFormat, SwaggerParser};
