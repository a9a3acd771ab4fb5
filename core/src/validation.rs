//! Pre-flight request validation.
//!
//! # Design
//! `validate` is a pure function: no I/O, no side effects, same inputs same
//! output. It reports problems as data (field name to reason) rather than
//! erroring, and the resource operations decide whether a non-empty map is
//! fatal. The map is all-or-nothing per field — every failing field appears,
//! never a partial subset.

use std::collections::HashMap;

use serde_json::Value;

use crate::types::HeaderParams;

/// Check the header parameters, bearer token and body required by the
/// prefill operations. Returns an empty map when everything passes.
pub fn validate(body: &Value, params: &HeaderParams, bearer_token: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    require(&mut errors, "message_type_id", &params.message_type_id);
    require(&mut errors, "request_id", &params.request_id);
    require(&mut errors, "client_id", &params.client_id);
    require(&mut errors, "bearer_token", bearer_token);

    if body.is_null() {
        errors.insert("body".to_string(), "request body is required".to_string());
    }

    errors
}

fn require(errors: &mut HashMap<String, String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), format!("{field} is required"));
    }
}
