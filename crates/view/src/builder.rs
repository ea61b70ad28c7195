//! Document → view model
//!
//! One pass over the document: paths in declaration order, methods in the
//! configured order, each operation resolved on its own. The first structural
//! problem aborts the pass.

use crate::options::BuildOptions;
use crate::view::{DocumentView, OperationView};
use crate::{defaults, external_docs, parameters, responses};
use swagger_docgen_common::{
    Document, HttpMethod, Operation, OperationKey, PathItem, ValidationError,
};

/// Builds `DocumentView`s
#[derive(Debug, Clone, Default)]
pub struct ViewModelBuilder {
    options: BuildOptions,
}

impl ViewModelBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the view model for a whole document
    ///
    /// Produces exactly one `OperationView` per (path, method) pair the
    /// document declares. Fails if the document has no paths, if a path has
    /// no operations, or if any operation is malformed.
    pub fn build(&self, document: &Document) -> Result<DocumentView, ValidationError> {
        if document.paths.is_empty() {
            return Err(ValidationError::EmptyDocument);
        }

        let mut operations = Vec::new();

        for (path, path_item) in &document.paths {
            if !path_item.has_operations() {
                return Err(ValidationError::NoOperations { path: path.clone() });
            }

            for &method in self.options.method_order.methods() {
                let Some(operation) = path_item.operation(method) else {
                    continue;
                };
                let key = OperationKey::new(path.as_str(), method);
                operations.push(build_operation(document, path_item, key, operation)?);
            }
        }

        tracing::debug!(
            title = %document.info.title,
            operations = operations.len(),
            "built document view"
        );

        Ok(DocumentView {
            title: document.info.title.clone(),
            version: document.info.version.clone(),
            description: document.info.description.clone(),
            external_docs: external_docs::resolve(document.external_docs.as_ref()),
            operations,
        })
    }
}

fn build_operation(
    document: &Document,
    path_item: &PathItem,
    key: OperationKey,
    operation: &Operation,
) -> Result<OperationView, ValidationError> {
    let parameters = parameters::merge(
        &key,
        &path_item.parameters,
        operation.parameters.as_deref().unwrap_or_default(),
    )?;
    let responses = responses::normalize(&key, operation.responses.as_ref())?;

    tracing::debug!(
        operation = %key,
        parameters = parameters.len(),
        responses = responses.len(),
        "built operation view"
    );

    Ok(OperationView {
        html_id: html_id(&key.path, key.method),
        summary: operation.summary.clone(),
        description: operation.description.clone(),
        operation_id: operation.operation_id.clone(),
        tags: operation.tags.clone(),
        deprecated: operation.deprecated,
        consumes: defaults::resolve(operation.consumes.as_deref(), document.consumes.as_deref()),
        produces: defaults::resolve(operation.produces.as_deref(), document.produces.as_deref()),
        schemes: defaults::resolve(operation.schemes.as_deref(), document.schemes.as_deref()),
        has_displayable_parameters: parameters::has_displayable_parameters(&parameters),
        parameters,
        responses,
        external_docs: external_docs::resolve(operation.external_docs.as_ref()),
        path: key.path,
        method: key.method,
    })
}

/// Anchor id for an operation: `operation-{path}-{method}` with every
/// character outside `[A-Za-z0-9_-]` replaced by `-`
pub fn html_id(path: &str, method: HttpMethod) -> String {
    format!("operation-{}-{}", path, method.as_str())
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
