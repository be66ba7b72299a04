/*
 * Responsibility
 * - Member lookup の公開インターフェース (trait + Postgres backend)
 */
mod postgres;
mod store;

pub use postgres::PgMemberStore;
pub use store::{MemberRecord, MemberStore, StoreError, UserRole};

#[cfg(test)]
pub(crate) use store::testing;
