use reqwest::StatusCode;
use tracing::{error, info, instrument};

use crate::dto::analysis_dto::{AnalysisRequest, AnalysisResponse};
use crate::error::{ApiFailure, Error, Result};
use crate::services::api_client::{ApiClient, ANALYSIS_ENDPOINT};

pub const MISSING_SKILLS: &str = "Você precisa cadastrar suas habilidades para usar a análise com IA";
pub const INVALID_TOKEN: &str = "Token inválido. Faça login novamente.";
pub const NOT_PREMIUM: &str =
    "Você não tem permissão para usar a análise com IA. Atualize seu plano para premium.";
pub const ANALYSIS_FAILED: &str = "Erro ao analisar a vaga. Tente novamente.";

/// AI fit analysis of a job ad against the user's skills profile.
#[derive(Clone)]
pub struct AnalysisService {
    api: ApiClient,
}

impl AnalysisService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `job_url` is the posting's external link. Mapped failures carry
    /// their HTTP status so the view can offer the profile shortcut on 400.
    #[instrument(skip(self))]
    pub async fn analyze_job(&self, job_url: &str) -> Result<AnalysisResponse> {
        let payload = AnalysisRequest {
            position: job_url.to_string(),
        };
        let response = self
            .api
            .post::<_, AnalysisResponse>(ANALYSIS_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Job analysis failed");
                analysis_error(&err)
            })?;
        info!(chars = response.message.len(), "Job analysis received");
        Ok(response)
    }
}

fn analysis_error(failure: &ApiFailure) -> Error {
    match failure.status() {
        Some(status @ StatusCode::BAD_REQUEST) => Error::service_with_status(MISSING_SKILLS, status),
        Some(status @ StatusCode::UNAUTHORIZED) => Error::service_with_status(INVALID_TOKEN, status),
        Some(status @ StatusCode::FORBIDDEN) => Error::service_with_status(NOT_PREMIUM, status),
        _ => Error::service(ANALYSIS_FAILED),
    }
}
