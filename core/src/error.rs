//! Error types for the prefill API client.
//!
//! # Design
//! One closed enum covers every way a call can fail. The variants mirror the
//! upstream API's contract: 400/401/404 each get a dedicated variant because
//! callers handle them differently (fix the request, refresh credentials,
//! check the resource path), while every other non-2xx status and any
//! unclassifiable response lands in `Api` with the raw upstream body for
//! debugging. Validation and encryption failures are raised before any
//! network call and never carry an upstream body.

use std::collections::HashMap;
use std::fmt;

/// Fixed fallback message used when the upstream response (or the transport
/// itself) cannot be read or parsed. Callers match on this string, so it must
/// not change.
pub const INVALID_RESPONSE: &str = "Invalid response from API";

/// Errors returned by `PrefillClient` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefillError {
    /// The request failed validation, either before dispatch (pre-flight
    /// header/body checks, `fields` names each failing field) or from a 400
    /// response (`message` is the raw upstream body, `fields` is empty).
    RequestValidation {
        message: String,
        fields: HashMap<String, String>,
    },

    /// The server returned 401 — the bearer token or API key was rejected.
    Authentication(String),

    /// The server returned 404 — the message is the raw response body.
    ResourceNotFound(String),

    /// Loading the encryption certificate or producing the encrypted
    /// envelope failed. Always raised before any network call.
    PayloadEncryption(String),

    /// Any other non-2xx status, a 2xx response that could not be
    /// classified, or a transport/parse failure (fixed message
    /// [`INVALID_RESPONSE`]).
    Api(String),
}

impl PrefillError {
    /// Pre-flight validation failure carrying the field-to-reason map
    /// produced by [`crate::validation::validate`].
    pub fn validation(fields: HashMap<String, String>) -> Self {
        PrefillError::RequestValidation {
            message: "request validation failed".to_string(),
            fields,
        }
    }

    /// Validation failure derived from a 400 response body.
    pub(crate) fn validation_response(body: String) -> Self {
        PrefillError::RequestValidation {
            message: body,
            fields: HashMap::new(),
        }
    }

    /// Generic API failure with the fixed [`INVALID_RESPONSE`] message.
    pub(crate) fn invalid_response() -> Self {
        PrefillError::Api(INVALID_RESPONSE.to_string())
    }
}

impl fmt::Display for PrefillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefillError::RequestValidation { message, fields } => {
                if fields.is_empty() {
                    write!(f, "{message}")
                } else {
                    let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
                    names.sort_unstable();
                    write!(f, "{message}: {}", names.join(", "))
                }
            }
            PrefillError::Authentication(msg) => write!(f, "{msg}"),
            PrefillError::ResourceNotFound(msg) => write!(f, "{msg}"),
            PrefillError::PayloadEncryption(msg) => {
                write!(f, "payload encryption failed: {msg}")
            }
            PrefillError::Api(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PrefillError {}
