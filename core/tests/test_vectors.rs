//! Verify the response-classification table against JSON test vectors stored
//! in `test-vectors/`.
//!
//! Each case describes a simulated upstream response and the expected
//! outcome kind. The vectors pin the status-code mapping as data, so a
//! change to the table shows up as a readable diff rather than a scattered
//! test edit.

use prefill_core::{classify_response, ApiResponse, PrefillError};

fn response(status: u16, content_type: Option<&str>, body: &str) -> reqwest::Response {
    let mut builder = http::Response::builder().status(status);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    reqwest::Response::from(builder.body(body.to_string()).unwrap())
}

fn kind_of(outcome: &Result<ApiResponse, PrefillError>) -> &'static str {
    match outcome {
        Ok(ApiResponse::Json(_)) => "json",
        Ok(ApiResponse::Empty) => "empty",
        Err(PrefillError::RequestValidation { .. }) => "validation",
        Err(PrefillError::Authentication(_)) => "authentication",
        Err(PrefillError::ResourceNotFound(_)) => "not_found",
        Err(PrefillError::PayloadEncryption(_)) => "payload_encryption",
        Err(PrefillError::Api(_)) => "api",
    }
}

fn message_of(err: &PrefillError) -> &str {
    match err {
        PrefillError::RequestValidation { message, .. } => message,
        PrefillError::Authentication(msg)
        | PrefillError::ResourceNotFound(msg)
        | PrefillError::PayloadEncryption(msg)
        | PrefillError::Api(msg) => msg,
    }
}

#[tokio::test]
async fn classification_test_vectors() {
    let raw = include_str!("../../test-vectors/response-classification.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let content_type = case["content_type"].as_str();
        let body = case["body"].as_str().unwrap();
        let expect = &case["expect"];

        let outcome = classify_response(response(status, content_type, body)).await;
        assert_eq!(kind_of(&outcome), expect["kind"].as_str().unwrap(), "{name}: kind");

        match &outcome {
            Ok(ApiResponse::Json(value)) => {
                assert_eq!(value, &expect["value"], "{name}: parsed value");
            }
            Ok(ApiResponse::Empty) => {}
            Err(err) => {
                assert_eq!(
                    message_of(err),
                    expect["message"].as_str().unwrap(),
                    "{name}: message"
                );
            }
        }
    }
}
