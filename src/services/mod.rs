pub mod auth;
pub mod members;
