//! Prefill resource operations.
//!
//! # Design
//! Both operations share one shape: validate, optionally encrypt, dispatch.
//! Validation failures and encryption failures return before any network
//! I/O; the dispatcher's outcome is returned unchanged. The encrypted
//! variant replaces the outbound document with `{"user_info": <token>}` so
//! the wire never carries the plaintext.

use reqwest::Method;
use serde_json::{json, Value};

use crate::client::PrefillClient;
use crate::encryption;
use crate::error::PrefillError;
use crate::types::{ApiResponse, HeaderParams};
use crate::validation;

/// Resource path for prefill submissions.
pub const PREFILL_PATH: &str = "/acquisition/digital/v1/applications_prefillinfo";

impl PrefillClient {
    /// Submit prefill data as plain JSON.
    pub async fn save_data(
        &self,
        body: &Value,
        params: &HeaderParams,
    ) -> Result<ApiResponse, PrefillError> {
        self.check(body, params)?;
        let payload = serde_json::to_string(body)
            .map_err(|e| PrefillError::Api(e.to_string()))?;
        self.call_service(PREFILL_PATH, Method::POST, &params.to_headers(), payload)
            .await
    }

    /// Submit prefill data encrypted under the configured public key
    /// certificate.
    pub async fn save_encrypted_data(
        &self,
        body: &Value,
        params: &HeaderParams,
    ) -> Result<ApiResponse, PrefillError> {
        self.check(body, params)?;

        let cert = self
            .config()
            .payload_encryption
            .as_ref()
            .map(|pe| pe.public_key_cert.clone())
            .ok_or_else(|| {
                PrefillError::PayloadEncryption(
                    "no payload encryption certificate configured".to_string(),
                )
            })?;

        let serialized = serde_json::to_string(body)
            .map_err(|e| PrefillError::PayloadEncryption(e.to_string()))?;
        let token = encryption::encrypt(&serialized, &cert).await?;
        let payload = json!({ "user_info": token }).to_string();

        self.call_service(PREFILL_PATH, Method::POST, &params.to_headers(), payload)
            .await
    }

    fn check(&self, body: &Value, params: &HeaderParams) -> Result<(), PrefillError> {
        let errors = validation::validate(body, params, &self.config().authentication.bearer_token);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PrefillError::validation(errors))
        }
    }
}
