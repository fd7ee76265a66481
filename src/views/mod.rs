//! Screen state for the board. Each view owns the services it calls and
//! the messages it shows; rendering to text is left to the shell.

pub mod analysis_modal;
pub mod job_board;
pub mod job_card;
pub mod login;
pub mod profile;
pub mod register;

pub use analysis_modal::{AnalysisLine, AnalysisModal, AnalysisState};
pub use job_board::JobBoardView;
pub use job_card::{AnalysisAccess, JobCard};
pub use login::{FormMode, LoginView};
pub use profile::{PasswordChangeForm, ProfileSection, ProfileView};
pub use register::RegisterView;

pub const PREMIUM_ONLY: &str = "Recurso disponível apenas para usuários Premium";
