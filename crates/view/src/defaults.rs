//! Operation values that fall back to document-wide defaults
//!
//! Applies to `consumes`, `produces` and `schemes`, each independently.

use crate::view::ResolvedValues;

/// Resolve an operation-level list against the document default
///
/// A declared list wins even when it is empty. Only an absent list inherits
/// the document value, and the result is then marked as a fallback. Absent on
/// both levels yields an empty fallback list.
pub fn resolve(
    operation_value: Option<&[String]>,
    document_default: Option<&[String]>,
) -> ResolvedValues {
    match operation_value {
        Some(values) => ResolvedValues::explicit(values.to_vec()),
        None => ResolvedValues::fallback(
            document_default.map(<[String]>::to_vec).unwrap_or_default(),
        ),
    }
}
