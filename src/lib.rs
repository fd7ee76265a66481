pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::{AnalysisService, ApiClient, AuthService, JobsService, SkillsService};
use crate::session::{Session, SessionStore};
use crate::views::{AnalysisModal, JobBoardView, LoginView, ProfileView};

/// Everything the screens share: one session, one HTTP client, and the
/// services built on them.
#[derive(Clone)]
pub struct JobBoardApp {
    pub session: Session,
    pub jobs_service: JobsService,
    pub auth_service: AuthService,
    pub skills_service: SkillsService,
    pub analysis_service: AnalysisService,
}

impl JobBoardApp {
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self> {
        let session = Session::new(store);
        let api = ApiClient::new(config, session.clone())?;

        let jobs_service = JobsService::new(api.clone());
        let auth_service = AuthService::new(api.clone());
        let skills_service = SkillsService::new(api.clone());
        let analysis_service = AnalysisService::new(api);

        Ok(Self {
            session,
            jobs_service,
            auth_service,
            skills_service,
            analysis_service,
        })
    }

    pub fn login_view(&self) -> LoginView {
        LoginView::new(self.auth_service.clone())
    }

    pub fn job_board_view(&self) -> JobBoardView {
        JobBoardView::new(self.jobs_service.clone(), self.session.clone())
    }

    pub fn profile_view(&self) -> ProfileView {
        ProfileView::new(self.auth_service.clone(), self.skills_service.clone())
    }

    pub fn analysis_modal(&self) -> AnalysisModal {
        AnalysisModal::new(self.analysis_service.clone())
    }
}
