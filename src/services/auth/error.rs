/*
 * Responsibility
 * - Credential failure taxonomy surfaced by the auth gate
 * - Mapped to HTTP responses in crate::error (never rendered directly)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad scheme, bad signature or malformed payload.
    #[error("invalid credential")]
    InvalidToken,

    /// Signature checks out but the token is past its expiry.
    #[error("expired credential")]
    ExpiredToken,

    /// Token decoded but no live member matches its subject.
    #[error("member {0} not found")]
    MemberNotFound(i64),
}
