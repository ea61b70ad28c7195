//! View-model build configuration
//!
//! Options can be set in code or loaded from a YAML file:
//!
//! ```yaml
//! method_order: alphabetical
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swagger_docgen_common::{DocgenError, HttpMethod, Result};

/// Order in which the operations of one path are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodOrder {
    /// GET, PUT, POST, DELETE, OPTIONS, HEAD, PATCH
    #[default]
    Canonical,
    /// DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT
    Alphabetical,
}

impl MethodOrder {
    pub fn methods(&self) -> &'static [HttpMethod] {
        match self {
            MethodOrder::Canonical => &HttpMethod::CANONICAL,
            MethodOrder::Alphabetical => &HttpMethod::ALPHABETICAL,
        }
    }
}

/// Options for `ViewModelBuilder`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    pub method_order: MethodOrder,
}

impl BuildOptions {
    /// Load options from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DocgenError::Parse(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            DocgenError::Parse(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Parse options from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means "all defaults"; serde_yaml reads it as null.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_method_order(mut self, method_order: MethodOrder) -> Self {
        self.method_order = method_order;
        self
    }
}
