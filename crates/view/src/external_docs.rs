//! `externalDocs` link text

use crate::view::ExternalDocsLink;
use swagger_docgen_common::ExternalDocsRef;

/// Turn an `externalDocs` object into a link
///
/// The description is the link text; without one (or with a blank one) the
/// URL itself is shown.
pub fn resolve(external_docs: Option<&ExternalDocsRef>) -> Option<ExternalDocsLink> {
    let docs = external_docs?;

    let text = docs
        .description
        .as_deref()
        .filter(|description| !description.trim().is_empty())
        .unwrap_or(&docs.url);

    Some(ExternalDocsLink {
        href: docs.url.clone(),
        text: text.to_string(),
    })
}
