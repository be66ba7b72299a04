/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{auth::JwtHandler, members::MemberStore};

#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtHandler>,
    pub members: Arc<dyn MemberStore>,
}

impl AppState {
    pub fn new(jwt: Arc<JwtHandler>, members: Arc<dyn MemberStore>) -> Self {
        Self { jwt, members }
    }
}
