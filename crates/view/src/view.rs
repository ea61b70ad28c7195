//! Render-ready view model types
//!
//! Field names serialize in camelCase because templates address them that way
//! (`consumes.isFallback`, `externalDocs.href`, ...). Optional fields are
//! omitted rather than emitted as `null`.

use serde::Serialize;
use swagger_docgen_common::{HttpMethod, Parameter, Response};

/// The whole document, flattened for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    /// API title from `info`
    pub title: String,

    /// API version from `info`
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Document-level external docs. Never copied onto operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsLink>,

    /// One view per (path, method) pair, in render order
    pub operations: Vec<OperationView>,
}

impl DocumentView {
    /// Find the view for one (method, path) pair
    pub fn operation(&self, method: HttpMethod, path: &str) -> Option<&OperationView> {
        self.operations
            .iter()
            .find(|op| op.method == method && op.path == path)
    }
}

/// A single operation with all inheritance and merging already applied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationView {
    pub path: String,

    pub method: HttpMethod,

    /// Anchor id, e.g. `operation--user--id--get`
    pub html_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Copied verbatim; absent when the operation has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    pub deprecated: bool,

    pub consumes: ResolvedValues,

    pub produces: ResolvedValues,

    pub schemes: ResolvedValues,

    /// Path-level and operation-level parameters, merged
    pub parameters: Vec<Parameter>,

    /// True when at least one merged parameter is not a `body` parameter
    pub has_displayable_parameters: bool,

    /// Responses in declaration order
    pub responses: Vec<ResponseView>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsLink>,
}

/// A list value together with where it came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedValues {
    pub values: Vec<String>,

    /// Inherited from the document rather than declared on the operation
    pub is_fallback: bool,
}

impl ResolvedValues {
    /// Values the operation declared itself
    pub fn explicit(values: Vec<String>) -> Self {
        Self {
            values,
            is_fallback: false,
        }
    }

    /// Values inherited from the document
    pub fn fallback(values: Vec<String>) -> Self {
        Self {
            values,
            is_fallback: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One entry of an operation's responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    /// Status code or `default`
    pub code: String,

    pub is_default: bool,

    /// Standard reason phrase for known status codes ("Not Found")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// The Response Object as declared
    pub response: Response,
}

/// A resolved `externalDocs` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalDocsLink {
    pub href: String,
    pub text: String,
}
