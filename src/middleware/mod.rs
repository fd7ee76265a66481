pub mod auth;
pub mod unauthorized;
