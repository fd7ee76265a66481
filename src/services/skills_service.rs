use reqwest::StatusCode;
use tracing::{error, info, instrument};

use crate::dto::skills_dto::{SkillRequest, SkillsResponse};
use crate::dto::Ack;
use crate::error::{ApiFailure, Error, Result};
use crate::services::api_client::{ApiClient, SKILLS_ENDPOINT};
use crate::services::auth_service::NOT_AUTHORIZED;

pub const LOAD_SKILLS_FAILED: &str = "Erro ao carregar habilidades. Tente novamente.";
pub const INVALID_SKILL: &str = "Habilidade inválida ou já existe.";
pub const ADD_SKILL_FAILED: &str = "Erro ao adicionar habilidade. Tente novamente.";
pub const SKILL_NOT_FOUND: &str = "Habilidade não encontrada.";
pub const REMOVE_SKILL_FAILED: &str = "Erro ao remover habilidade. Tente novamente.";
pub const REMOVE_ALL_SKILLS_FAILED: &str = "Erro ao remover todas as habilidades. Tente novamente.";

/// The user's skills profile, which gates the AI analysis server-side.
#[derive(Clone)]
pub struct SkillsService {
    api: ApiClient,
}

impl SkillsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn get_skills(&self) -> Result<SkillsResponse> {
        let response = self
            .api
            .get::<Option<SkillsResponse>>(SKILLS_ENDPOINT)
            .await
            .map_err(|err| {
                error!(error = %err, "Failed to load skills");
                map_error(&err, None, LOAD_SKILLS_FAILED)
            })?
            .unwrap_or_default();
        info!(count = response.skills.len(), "Skills loaded");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn add_skill(&self, skill: &str) -> Result<Ack> {
        let payload = SkillRequest {
            skill: skill.to_string(),
        };
        let ack = self
            .api
            .post::<_, Option<Ack>>(SKILLS_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Failed to add skill");
                map_error(&err, Some((StatusCode::BAD_REQUEST, INVALID_SKILL)), ADD_SKILL_FAILED)
            })?;
        Ok(ack.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn remove_skill(&self, skill: &str) -> Result<Ack> {
        let payload = SkillRequest {
            skill: skill.to_string(),
        };
        let ack = self
            .api
            .put::<_, Option<Ack>>(SKILLS_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Failed to remove skill");
                map_error(&err, Some((StatusCode::NOT_FOUND, SKILL_NOT_FOUND)), REMOVE_SKILL_FAILED)
            })?;
        Ok(ack.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn remove_all_skills(&self) -> Result<Ack> {
        let ack = self
            .api
            .delete::<Option<Ack>>(SKILLS_ENDPOINT)
            .await
            .map_err(|err| {
                error!(error = %err, "Failed to remove all skills");
                map_error(&err, None, REMOVE_ALL_SKILLS_FAILED)
            })?;
        Ok(ack.unwrap_or_default())
    }
}

/// 401 is shared by every skills call; `specific` adds one extra mapping.
fn map_error(failure: &ApiFailure, specific: Option<(StatusCode, &str)>, fallback: &str) -> Error {
    match (failure.status(), specific) {
        (Some(StatusCode::UNAUTHORIZED), _) => Error::service(NOT_AUTHORIZED),
        (Some(status), Some((expected, message))) if status == expected => Error::service(message),
        _ => Error::service(fallback),
    }
}
