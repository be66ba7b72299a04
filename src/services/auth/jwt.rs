/*
 * Responsibility
 * - HS256 token codec: create_token (issuance/tests) and extract_member_id (gate)
 * - Scheme check + decode + subject promotion live here; HTTP mapping does not
 */
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::services::auth::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    // Member id as a decimal string (JWT subjects are strings).
    sub: String,
    iat: i64,
    exp: i64,
}

/// Symmetric (HS256) access-token handler.
///
/// Built once from config and shared via `AppState`. The signing secret is
/// captured in the key material and never re-read from the environment.
#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtHandler")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtHandler {
    /// `leeway_seconds` widens expiry checks for clock skew. The crate default
    /// of 60s would let a just-expired token pass, so callers pass it
    /// explicitly (config default: 0).
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for `member_id` valid for `valid_seconds` from `issued_at`.
    pub fn create_token(
        &self,
        member_id: i64,
        valid_seconds: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: member_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(valid_seconds)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify the raw `Authorization` header value and return the member id.
    ///
    /// An absent header is normalized to `""` by the caller and fails the
    /// scheme check here rather than being special-cased upstream.
    pub fn extract_member_id(&self, auth_header: &str) -> Result<i64, AuthError> {
        let token = auth_header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::InvalidToken)?;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;

        Self::parse_subject(&data.claims.sub)
    }

    // Member ids are positive integers; anything else in `sub` is a bad credential.
    fn parse_subject(sub: &str) -> Result<i64, AuthError> {
        let member_id: i64 = sub.parse().map_err(|_| AuthError::InvalidToken)?;
        if member_id <= 0 {
            return Err(AuthError::InvalidToken);
        }
        Ok(member_id)
    }
}
