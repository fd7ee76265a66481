pub mod analysis_service;
pub mod api_client;
pub mod auth_service;
pub mod jobs_service;
pub mod skills_service;

pub use analysis_service::AnalysisService;
pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use jobs_service::JobsService;
pub use skills_service::SkillsService;
