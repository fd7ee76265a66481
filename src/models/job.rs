use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{opt_string_flexible, string_or_default};

/// One job ad as served by `GET /api/jobs`. Read-only on the client.
/// Strings may arrive as numbers or `null`; neither fails the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    #[serde(deserialize_with = "string_or_default")]
    pub id: String,
    #[serde(deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(deserialize_with = "string_or_default")]
    pub company: String,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub seniority_level: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub field: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub employment_type: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub workplace_type: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub published_date: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "opt_string_flexible")]
    pub application_deadline: Option<String>,
    #[serde(deserialize_with = "string_or_default")]
    pub url: String,
}
