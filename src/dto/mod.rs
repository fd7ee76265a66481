pub mod analysis_dto;
pub mod auth_dto;
pub mod jobs_dto;
pub mod skills_dto;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Success marker returned by mutating endpoints. An empty body counts as
/// success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Default for Ack {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}
