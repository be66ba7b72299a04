/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークン検証や member lookup は middleware/services 側の責務
 */

use crate::services::members::UserRole;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `member_id` は検証済みトークンの subject (正の整数)
/// - `role` は coarse-grained な権限情報 (細かい認可は handler/service 側)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub member_id: i64,
    pub role: UserRole,
}

impl AuthCtx {
    pub fn new(member_id: i64, role: UserRole) -> Self {
        Self { member_id, role }
    }
}
