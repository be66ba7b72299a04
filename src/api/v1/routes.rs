/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ここに載る route は全て auth middleware の内側 (app.rs で適用)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::members::me;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
