use crate::error::{NagiosError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope is the uniform reply shape the Nagios XI API wraps outcomes in.
///
/// The server reports application-level failures inside 200-OK responses, so
/// the envelope rather than the HTTP status is the authoritative signal of
/// whether a request succeeded. Only one of the two fields is meaningfully
/// populated at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Success message (e.g. "Object created successfully")
    #[serde(default)]
    pub success: String,

    /// Error message; non-empty means the request failed
    #[serde(default)]
    pub error: String,
}

/// Classify a response body against the envelope shape.
///
/// A body that deserializes as an object with a non-empty `error` field is a
/// semantic failure and yields [`NagiosError::Api`] carrying the message and
/// the raw body for diagnostics. An empty `error` field is success regardless
/// of HTTP status. List endpoints return a top-level JSON array instead of an
/// envelope; for those the check is skipped and the caller parses the list
/// shape itself. A body that is not valid JSON at all is a hard error.
pub fn interpret(body: &[u8]) -> Result<()> {
    let value: Value = serde_json::from_slice(body)?;

    if !value.is_object() {
        return Ok(());
    }

    let envelope: Envelope = serde_json::from_value(value)?;

    if !envelope.error.is_empty() {
        return Err(NagiosError::Api {
            message: envelope.error,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    Ok(())
}
