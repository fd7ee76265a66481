use serde::{Deserialize, Serialize};

/// Body of `POST /api/skills` (add) and `PUT /api/skills` (remove one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMeta {
    #[serde(default)]
    pub total_records: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsResponse {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub meta: Option<SkillsMeta>,
}
