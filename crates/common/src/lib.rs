//! Common types and utilities for swagger-docgen
//!
//! This crate contains the Swagger 2.0 document model and the error types
//! shared by the parser, view-model, and CLI components.

mod document;

pub use document::*;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading a document or building its view model
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for docgen operations
pub type Result<T> = std::result::Result<T, DocgenError>;

/// Structural problems in an input document that make it unrenderable
///
/// The view-model pass stops at the first one of these it finds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{operation}: parameter '{name}' (in: {location}) is declared twice at {level} level")]
    DuplicateParameter {
        operation: OperationKey,
        level: ParameterLevel,
        name: String,
        location: ParameterLocation,
    },

    #[error("{operation}: operation declares no responses")]
    MissingResponses { operation: OperationKey },

    #[error("document declares no paths")]
    EmptyDocument,

    #[error("path '{path}' declares no operations")]
    NoOperations { path: String },
}

/// Where a parameter list was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLevel {
    /// Shared list on the Path Item Object
    Path,
    /// The operation's own list
    Operation,
}

impl fmt::Display for ParameterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLevel::Path => write!(f, "path"),
            ParameterLevel::Operation => write!(f, "operation"),
        }
    }
}

/// Identifies one operation as a (path, method) pair, e.g. `GET /user/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    pub path: String,
    pub method: HttpMethod,
}

impl OperationKey {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
