use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use tracing::warn;

use crate::session::Session;

/// `Bearer <token>` for a non-empty token.
pub fn bearer_value(token: Option<&str>) -> Option<HeaderValue> {
    let token = token.filter(|t| !t.is_empty())?;
    match HeaderValue::from_str(&format!("Bearer {}", token)) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Session token contains characters not allowed in a header, sending request without it");
            None
        }
    }
}

/// Request interceptor: attaches the session token when there is one.
pub fn attach_bearer(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match bearer_value(session.token().as_deref()) {
        Some(value) => builder.header(AUTHORIZATION, value),
        None => builder,
    }
}
