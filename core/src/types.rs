//! Request header parameters and the success payload type.
//!
//! # Design
//! The prefill document itself stays a `serde_json::Value` — its schema
//! belongs to the upstream contract, not to this SDK. Header parameters have
//! a fixed, known field set, so they get a proper struct; "missing" is
//! modelled as an empty string for required fields and `None` for the
//! optional consent fields, matching what the validator checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-call header parameters for the prefill operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderParams {
    /// Message type identifier shared by the API provider
    /// (1001 plain payload, 2001 encrypted payload).
    pub message_type_id: String,
    /// Unique id for tracking this call.
    pub request_id: String,
    /// Client id for the prefill operation, distinct from the
    /// authentication client key.
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_consent_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_consent_timestamp: Option<u64>,
}

impl HeaderParams {
    /// Build params with a freshly generated v4 UUID `request_id` and no
    /// consent fields.
    pub fn new(message_type_id: &str, client_id: &str) -> Self {
        Self {
            message_type_id: message_type_id.to_string(),
            request_id: Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            user_consent_status: None,
            user_consent_timestamp: None,
        }
    }

    /// Header pairs sent with the outbound request. Consent fields are
    /// omitted when unset.
    pub fn to_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("message_type_id".to_string(), self.message_type_id.clone()),
            ("request_id".to_string(), self.request_id.clone()),
            ("client_id".to_string(), self.client_id.clone()),
        ];
        if let Some(status) = self.user_consent_status {
            headers.push(("user_consent_status".to_string(), status.to_string()));
        }
        if let Some(ts) = self.user_consent_timestamp {
            headers.push(("user_consent_timestamp".to_string(), ts.to_string()));
        }
        headers
    }
}

/// Successful outcome of a dispatched call.
///
/// The upstream API answers some calls with a JSON document and others with
/// a bare 2xx and no declared content type; `Empty` is the second case.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx with a JSON content type, parsed.
    Json(serde_json::Value),
    /// 2xx with no content type header — the call succeeded but there is
    /// no body to report.
    Empty,
}
