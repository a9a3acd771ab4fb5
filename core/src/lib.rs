//! Asynchronous client SDK for submitting applicant prefill data to a
//! remote financial-services API.
//!
//! # Overview
//! Two operations, [`PrefillClient::save_data`] and
//! [`PrefillClient::save_encrypted_data`], submit an arbitrary JSON document
//! to the prefill endpoint. Each call validates its header parameters,
//! optionally wraps the document in a compact JWE, issues exactly one POST,
//! and normalizes the response into [`ApiResponse`] or one of the
//! [`PrefillError`] kinds.
//!
//! # Design
//! - [`Config`] is an explicit value built by the caller; the client never
//!   loads configuration or fetches tokens itself.
//! - The client holds no mutable state between calls, so any number of
//!   calls may be in flight concurrently.
//! - Failures are never retried internally; retry, backoff and logging
//!   policy belong to the caller.

pub mod client;
pub mod config;
pub mod encryption;
pub mod error;
pub mod prefill;
pub mod types;
pub mod validation;

pub use client::{classify_response, PrefillClient};
pub use config::{Authentication, Config, HttpProxy, MutualAuth, PayloadEncryption};
pub use error::{PrefillError, INVALID_RESPONSE};
pub use prefill::PREFILL_PATH;
pub use reqwest::Method;
pub use types::{ApiResponse, HeaderParams};
