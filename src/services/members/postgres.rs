/*
 * Responsibility
 * - members テーブル向け SQLx 実装 (MemberStore backend)
 * - PgPool を受け取り lookup を提供、deleted 行は常に除外
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::services::members::{MemberRecord, MemberStore, StoreError, UserRole};

#[derive(Debug, FromRow)]
struct MemberRow {
    id: i64,
    email: String,
    member_name: String,
    profile_url: Option<String>,
    role: String,
}

pub struct PgMemberStore {
    db: PgPool,
}

impl PgMemberStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn find_active(&self, member_id: i64) -> Result<Option<MemberRecord>, StoreError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, email, member_name, profile_url, role
            FROM members
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(member_id)
        .fetch_optional(&self.db)
        .await?;

        row.map(|r| {
            let role = UserRole::parse(&r.role).ok_or(StoreError::Corrupt("role"))?;
            Ok(MemberRecord {
                id: r.id,
                email: r.email,
                member_name: r.member_name,
                profile_url: r.profile_url,
                role,
            })
        })
        .transpose()
    }
}
