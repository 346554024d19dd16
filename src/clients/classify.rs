//! Status-class error classification.

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;

/// Turns a completed response into its body or a typed error.
///
/// Classification looks at the numeric status only:
///
/// - below 400: the parsed body is returned
/// - 400 to 499: [`HttpError::Client`]
/// - 500 and above: [`HttpError::Server`]
///
/// The body travels unchanged into the error's `data`, even when it carries
/// its own `code` field.
///
/// # Errors
///
/// Returns [`HttpError::Client`] or [`HttpError::Server`] for statuses of 400 and above.
///
/// # Example
///
/// ```rust
/// use rest_api::{classify, HttpError, HttpResponse};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let ok = HttpResponse::new(201, HashMap::new(), json!({"_id": 3}));
/// assert_eq!(classify(ok).unwrap(), json!({"_id": 3}));
///
/// let missing = HttpResponse::new(404, HashMap::new(), json!({"code": 1401}));
/// match classify(missing) {
///     Err(HttpError::Client(e)) => {
///         assert_eq!(e.code, 404);
///         assert_eq!(e.data, json!({"code": 1401}));
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify(response: HttpResponse) -> Result<Value, HttpError> {
    let HttpResponse { status, body, .. } = response;

    match status {
        0..=399 => Ok(body),
        400..=499 => Err(HttpError::Client(HttpResponseError::new(status, body))),
        _ => {
            let error = HttpResponseError::new(status, body);
            tracing::warn!("Server error {} received: {}", error.code, error.message);
            Err(HttpError::Server(error))
        }
    }
}
