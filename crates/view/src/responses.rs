//! Response normalization

use crate::view::ResponseView;
use indexmap::IndexMap;
use swagger_docgen_common::{OperationKey, Response, ValidationError};

/// Key of the catch-all response
pub const DEFAULT_RESPONSE: &str = "default";

/// Flatten an operation's responses into a list, keeping declaration order
///
/// Nothing is sorted, filtered or deduplicated. An operation without any
/// response is malformed.
pub fn normalize(
    operation: &OperationKey,
    responses: Option<&IndexMap<String, Response>>,
) -> Result<Vec<ResponseView>, ValidationError> {
    let responses = responses
        .filter(|responses| !responses.is_empty())
        .ok_or_else(|| ValidationError::MissingResponses {
            operation: operation.clone(),
        })?;

    Ok(responses
        .iter()
        .map(|(code, response)| ResponseView {
            code: code.clone(),
            is_default: code == DEFAULT_RESPONSE,
            reason: reason_phrase(code).map(String::from),
            response: response.clone(),
        })
        .collect())
}

/// Standard reason phrase for an HTTP status code
pub fn reason_phrase(code: &str) -> Option<&'static str> {
    let phrase = match code.parse::<u16>().ok()? {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        422 => "Unprocessable Entity",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        _ => return None,
    };

    Some(phrase)
}
