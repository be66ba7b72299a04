/*
 * Responsibility
 * - Token verification service (JwtHandler) and its error taxonomy
 */
mod error;
mod jwt;

pub use error::AuthError;
pub use jwt::JwtHandler;
