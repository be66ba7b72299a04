/*
 * Responsibility
 * - MemberStore trait: the lookup contract the auth gate depends on
 * - Kept as a trait object so the gate can be exercised without a database
 */
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Normal,
    Admin,
}

impl UserRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NORMAL" => Some(Self::Normal),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// A live (non-deleted) member row as seen by the rest of the app.
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub id: i64,
    pub email: String,
    pub member_name: String,
    pub profile_url: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("db error")]
    Db(#[from] sqlx::Error),

    #[error("corrupt member row: {0}")]
    Corrupt(&'static str),
}

#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Look up a member by id, excluding soft-deleted rows.
    ///
    /// `Ok(None)` means "no such live member" and is an authentication
    /// failure at the gate; `Err(_)` is a backend outage and must not be
    /// reported as a credential problem.
    async fn find_active(&self, member_id: i64) -> Result<Option<MemberRecord>, StoreError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    /// In-memory store for exercising the auth gate without Postgres.
    pub struct InMemoryMembers {
        members: HashMap<i64, MemberRecord>,
    }

    impl InMemoryMembers {
        pub fn with(members: Vec<MemberRecord>) -> Self {
            Self {
                members: members.into_iter().map(|m| (m.id, m)).collect(),
            }
        }
    }

    #[async_trait]
    impl MemberStore for InMemoryMembers {
        async fn find_active(&self, member_id: i64) -> Result<Option<MemberRecord>, StoreError> {
            Ok(self.members.get(&member_id).cloned())
        }
    }

    pub fn member(id: i64) -> MemberRecord {
        MemberRecord {
            id,
            email: "test@email.com".to_string(),
            member_name: "tester".to_string(),
            profile_url: Some("/profile.png".to_string()),
            role: UserRole::Normal,
        }
    }
}
