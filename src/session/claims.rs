use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::models::Role;
use crate::utils::serde_helpers::{opt_string_lenient, opt_u64_lenient};

/// Payload segment of the session token. Nothing here is verified, and
/// oddly typed claims read as absent rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_lenient")]
    pub exp: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl UserClaims {
    pub fn role(&self) -> Role {
        self.role.as_deref().map(Role::from).unwrap_or_default()
    }
}

/// Decodes the middle segment of `token`. Accepts standard or URL-safe
/// base64, padded or not. Returns `None` on any failure.
pub fn decode_claims(token: &str) -> Option<UserClaims> {
    let segment = token.split('.').nth(1)?;
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = STANDARD_NO_PAD.decode(normalized.as_bytes()).ok()?;
    let payload: JsonValue = serde_json::from_slice(&bytes).ok()?;
    if !payload.is_object() {
        return None;
    }
    serde_json::from_value(payload).ok()
}

/// `Role::Free` unless the token decodes and names another tier.
pub fn role_from_token(token: Option<&str>) -> Role {
    token
        .and_then(decode_claims)
        .map(|claims| claims.role())
        .unwrap_or_default()
}
