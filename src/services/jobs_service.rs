use tracing::{error, info, instrument};

use crate::dto::jobs_dto::JobsPayload;
use crate::error::{Error, Result};
use crate::models::JobPosting;
use crate::services::api_client::{ApiClient, JOBS_ENDPOINT};

pub const LOAD_JOBS_FAILED: &str = "Falha ao carregar as vagas de emprego";

#[derive(Clone)]
pub struct JobsService {
    api: ApiClient,
}

impl JobsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn get_jobs(&self) -> Result<Vec<JobPosting>> {
        match self.api.get::<JobsPayload>(JOBS_ENDPOINT).await {
            Ok(payload) => {
                let jobs = payload.into_jobs();
                info!(count = jobs.len(), "Jobs loaded");
                Ok(jobs)
            }
            Err(err) => {
                error!(error = %err, "Failed to load jobs");
                Err(Error::service(LOAD_JOBS_FAILED))
            }
        }
    }
}
