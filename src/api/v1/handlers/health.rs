/*
 * Responsibility
 * - GET /health (疎通用)
 * - auth middleware を通さない前提のエンドポイント
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
