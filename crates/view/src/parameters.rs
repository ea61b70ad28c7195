//! Path-level and operation-level parameter merging

use std::collections::HashSet;
use swagger_docgen_common::{
    OperationKey, Parameter, ParameterLevel, ParameterLocation, ValidationError,
};

/// Merge the Path Item's shared parameters with the operation's own
///
/// Path-level parameters come first, in their declared order, minus any the
/// operation overrides. The operation's parameters follow in their declared
/// order. An override replaces the path-level parameter wholesale; fields are
/// never combined.
///
/// Declaring the same (`name`, `in`) pair twice on one level is an error.
pub fn merge(
    operation: &OperationKey,
    path_params: &[Parameter],
    operation_params: &[Parameter],
) -> Result<Vec<Parameter>, ValidationError> {
    unique_keys(operation, ParameterLevel::Path, path_params)?;
    let overridden = unique_keys(operation, ParameterLevel::Operation, operation_params)?;

    let merged = path_params
        .iter()
        .filter(|param| !overridden.contains(&key(param)))
        .chain(operation_params)
        .cloned()
        .collect();

    Ok(merged)
}

/// Whether a parameters section is worth rendering
///
/// A list holding only `body` parameters counts as empty: the body is shown
/// elsewhere.
pub fn has_displayable_parameters(params: &[Parameter]) -> bool {
    params
        .iter()
        .any(|param| param.location != ParameterLocation::Body)
}

fn key(param: &Parameter) -> (&str, ParameterLocation) {
    (param.name.as_str(), param.location)
}

fn unique_keys<'a>(
    operation: &OperationKey,
    level: ParameterLevel,
    params: &'a [Parameter],
) -> Result<HashSet<(&'a str, ParameterLocation)>, ValidationError> {
    let mut keys = HashSet::with_capacity(params.len());

    for param in params {
        if !keys.insert(key(param)) {
            return Err(ValidationError::DuplicateParameter {
                operation: operation.clone(),
                level,
                name: param.name.clone(),
                location: param.location,
            });
        }
    }

    Ok(keys)
}
