//! Swagger spec file parser

use std::fs;
use std::path::Path;
use swagger_docgen_common::{DocgenError, Document, Result};

/// Swagger version this loader accepts
const SUPPORTED_VERSION: &str = "2.0";

/// Serialization format of a spec file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from the file extension, defaulting to YAML
    ///
    /// YAML is a superset of JSON, so unknown extensions still parse.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }
}

/// Swagger specification parser
///
/// Reads an already-dereferenced Swagger 2.0 document.
pub struct SwaggerParser {
    /// Loaded document
    document: Document,
}

impl SwaggerParser {
    /// Load a Swagger document from a file, detecting its format
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SwaggerParser::from_file("swagger.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = SourceFormat::detect(path.as_ref());
        Self::from_file_with_format(path, format)
    }

    /// Load a Swagger document from a file in the given format
    pub fn from_file_with_format<P: AsRef<Path>>(path: P, format: SourceFormat) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DocgenError::Parse(format!(
                "Failed to read Swagger file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.as_ref().display(), ?format, "loading swagger document");

        match format {
            SourceFormat::Json => Self::from_json(&content),
            SourceFormat::Yaml => Self::from_yaml(&content),
        }
    }

    /// Parse a Swagger document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(json)
            .map_err(|e| DocgenError::Parse(format!("Failed to parse Swagger JSON: {}", e)))?;

        Self::from_document(document)
    }

    /// Parse a Swagger document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: Document = serde_yaml::from_str(yaml)
            .map_err(|e| DocgenError::Parse(format!("Failed to parse Swagger YAML: {}", e)))?;

        Self::from_document(document)
    }

    fn from_document(document: Document) -> Result<Self> {
        if document.swagger != SUPPORTED_VERSION {
            return Err(DocgenError::Parse(format!(
                "Unsupported Swagger version '{}', expected '{}'",
                document.swagger, SUPPORTED_VERSION
            )));
        }

        Ok(Self { document })
    }

    /// Get reference to the loaded document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the loaded document
    pub fn into_document(self) -> Document {
        self.document
    }
}
