//! Swagger 2.0 document model
//!
//! Only the fields needed to build documentation view models are typed.
//! Schema-ish details of parameters and responses are kept verbatim as JSON
//! values so renderers can still show them.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Swagger document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Swagger version (e.g., "2.0")
    #[serde(default)]
    pub swagger: String,

    /// API metadata
    #[serde(default)]
    pub info: Info,

    /// Host serving the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Base path prefixed to every path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// API paths in declaration order. `x-` vendor extensions are dropped.
    #[serde(default, deserialize_with = "deserialize_paths")]
    pub paths: IndexMap<String, PathItem>,

    /// Default request MIME types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    /// Default response MIME types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    /// Default transfer protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    /// Tag metadata
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Document-wide external documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsRef>,
}

/// Prefix of vendor extension keys
pub const EXTENSION_PREFIX: &str = "x-";

/// Read the Paths Object, skipping `x-` keys, which may hold any value
fn deserialize_paths<'de, D>(deserializer: D) -> Result<IndexMap<String, PathItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;

    raw.into_iter()
        .filter(|(key, _)| !key.starts_with(EXTENSION_PREFIX))
        .map(|(key, value)| {
            let item = serde_json::from_value(value)
                .map_err(|e| D::Error::custom(format!("paths.{}: {}", key, e)))?;
            Ok((key, item))
        })
        .collect()
}

/// API information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    #[serde(default)]
    pub title: String,

    /// API version
    #[serde(default)]
    pub version: String,

    /// API description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsRef>,
}

/// Path item (operations for one URL template)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// Parameters shared by every operation on this path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Get the operation declared for `method`, if any
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
        }
    }

    /// True if at least one HTTP method has an operation
    pub fn has_operations(&self) -> bool {
        HttpMethod::CANONICAL
            .iter()
            .any(|method| self.operation(*method).is_some())
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Short summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Longer description (GFM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Operation ID (unique identifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Tags (for grouping)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub deprecated: bool,

    /// Request MIME types. `Some(vec![])` is an explicit empty list and
    /// differs from `None`, which inherits the document default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    /// Response MIME types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    /// Transfer protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    /// Own parameters (override path-level ones with the same name and location)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Responses keyed by status code or "default", in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsRef>,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: query, header, path, formData, body
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Everything else (type, format, schema, items, ...), untouched
    #[serde(flatten)]
    pub details: IndexMap<String, Value>,
}

impl Parameter {
    /// Create a parameter with no description or schema details
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: location == ParameterLocation::Path,
            details: IndexMap::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parameter location (`in`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    FormData,
    Body,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Body => "body",
        };
        f.write_str(s)
    }
}

/// Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    /// Headers, examples and extensions, untouched
    #[serde(flatten)]
    pub details: IndexMap<String, Value>,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

/// External documentation reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocsRef {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// HTTP methods a Path Item Object may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Field order of the Path Item Object
    pub const CANONICAL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
    ];

    /// Sorted by upper-case name
    pub const ALPHABETICAL: [HttpMethod; 7] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
    ];

    /// Lower-case name as used for Path Item keys
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}
