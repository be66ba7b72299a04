/*
 * Responsibility
 * - Members の response DTO
 */
use serde::Serialize;

use crate::services::members::{MemberRecord, UserRole};

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub member_name: String,
    pub profile_url: Option<String>,
    pub role: UserRole,
}

impl From<MemberRecord> for MemberResponse {
    fn from(m: MemberRecord) -> Self {
        Self {
            id: m.id,
            email: m.email,
            member_name: m.member_name,
            profile_url: m.profile_url,
            role: m.role,
        }
    }
}
