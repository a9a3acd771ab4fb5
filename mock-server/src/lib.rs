//! In-process stand-in for the remote prefill API, used by the core crate's
//! integration tests and runnable as a binary for manual testing.
//!
//! Submissions are stored by `request_id` and readable back over HTTP, so
//! tests can verify exactly what went over the wire. Error responses use
//! plain-text bodies for 400/401 and a JSON body for 404, matching the mix
//! of shapes the real API produces.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Resource path served for prefill submissions.
pub const PREFILL_PATH: &str = "/acquisition/digital/v1/applications_prefillinfo";

/// Bearer token the mock always rejects with 401, for exercising the
/// authentication error path.
pub const EXPIRED_TOKEN: &str = "expired";

pub type Db = Arc<RwLock<HashMap<String, Value>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(PREFILL_PATH, post(save_prefill))
        .route(
            &format!("{PREFILL_PATH}/{{request_id}}"),
            get(get_submission).delete(delete_submission),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn save_prefill(
    State(db): State<Db>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Value>, (StatusCode, String)> {
    let token = header(&headers, "authorization")
        .strip_prefix("Bearer ")
        .unwrap_or_default()
        .to_string();
    if token.is_empty() || token == EXPIRED_TOKEN {
        return Err((
            StatusCode::UNAUTHORIZED,
            "invalid or missing bearer token".to_string(),
        ));
    }
    if header(&headers, "x-amex-api-key").is_empty() {
        return Err((StatusCode::UNAUTHORIZED, "missing API key".to_string()));
    }

    let request_id = header(&headers, "request_id");
    if request_id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "request_id header is required".to_string(),
        ));
    }

    let message_type_id = header(&headers, "message_type_id");
    if message_type_id != "1001" && message_type_id != "2001" {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("unsupported message_type_id: {message_type_id}"),
        ));
    }

    let document: Value = serde_json::from_str(&body)
        .map_err(|_| (StatusCode::BAD_REQUEST, "request body must be JSON".to_string()))?;

    if message_type_id == "2001" && document.get("user_info").and_then(Value::as_str).is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            "user_info is required for encrypted submissions".to_string(),
        ));
    }

    db.write().await.insert(request_id.to_string(), document);

    Ok(Json(json!({
        "prefill_info": {
            "applicant_request_token": Uuid::new_v4().to_string(),
            "applicant_request_token_expires_in": "3600000"
        }
    })))
}

async fn get_submission(
    State(db): State<Db>,
    Path(request_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let submissions = db.read().await;
    submissions.get(&request_id).cloned().map(Json).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({"message": format!("no submission for request_id {request_id}")})),
    ))
}

// Responds 200 with an empty body and no content type, which the client
// classifies as an empty success.
async fn delete_submission(
    State(db): State<Db>,
    Path(request_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let mut submissions = db.write().await;
    submissions.remove(&request_id).map(|_| StatusCode::OK).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({"message": format!("no submission for request_id {request_id}")})),
    ))
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or("")
}
