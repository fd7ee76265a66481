use tracing::{debug, info};
use validator::Validate;

use crate::dto::auth_dto::FILL_ALL_FIELDS;
use crate::dto::skills_dto::SkillsResponse;
use crate::error::{Error, Result};
use crate::routes::Route;
use crate::services::{AuthService, SkillsService};
use crate::utils::sequence::{RequestSequencer, Ticket};
use crate::utils::validation::{first_code, first_message, validate};

use super::PREMIUM_ONLY;

pub const PASSWORD_MISMATCH: &str = "A nova senha e a confirmação não coincidem";
pub const PASSWORD_UNCHANGED: &str = "A nova senha deve ser diferente da senha atual";
pub const PASSWORD_CHANGED: &str = "Senha alterada com sucesso!";
pub const SKILL_REQUIRED: &str = "Por favor, informe uma habilidade";

#[derive(Debug, Clone, Default, Validate)]
pub struct PasswordChangeForm {
    #[validate(length(min = 1, code = "required"))]
    pub old_password: String,
    #[validate(length(min = 1, code = "required"))]
    pub new_password: String,
    #[validate(
        length(min = 1, code = "required"),
        must_match(other = "new_password", message = "A nova senha e a confirmação não coincidem")
    )]
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn new(old: &str, new: &str, confirm: &str) -> Self {
        Self {
            old_password: old.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    /// First problem, in display order: missing fields, mismatched
    /// confirmation, unchanged password.
    pub fn problem(&self) -> Option<String> {
        if let Err(errors) = validate(self) {
            let missing = ["old_password", "new_password", "confirm_password"]
                .iter()
                .any(|field| first_code(&errors, field).as_deref() == Some("required"));
            if missing {
                return Some(FILL_ALL_FIELDS.to_string());
            }
            if let Some(message) = first_message(&errors, "confirm_password") {
                return Some(message);
            }
        }
        if self.new_password == self.old_password {
            return Some(PASSWORD_UNCHANGED.to_string());
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    ChangePassword,
    DeleteAccount,
}

/// The `/perfil` screen: password change, account deletion and, for
/// premium users, the skills profile.
pub struct ProfileView {
    auth: AuthService,
    skills_service: SkillsService,
    section: Option<ProfileSection>,
    pub password_form: PasswordChangeForm,
    error: Option<String>,
    success: Option<String>,
    is_loading: bool,
    skills: Vec<String>,
    skills_error: Option<String>,
    skills_sequencer: RequestSequencer,
}

impl ProfileView {
    pub fn new(auth: AuthService, skills_service: SkillsService) -> Self {
        Self {
            auth,
            skills_service,
            section: None,
            password_form: PasswordChangeForm::default(),
            error: None,
            success: None,
            is_loading: false,
            skills: Vec::new(),
            skills_error: None,
            skills_sequencer: RequestSequencer::new(),
        }
    }

    pub fn section(&self) -> Option<ProfileSection> {
        self.section
    }

    /// Opening a section closes the other one; the same section toggles.
    pub fn toggle_section(&mut self, section: ProfileSection) {
        self.section = if self.section == Some(section) {
            None
        } else {
            Some(section)
        };
        self.error = None;
        self.success = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_premium(&self) -> bool {
        self.auth.get_user_role().is_premium()
    }

    pub fn username(&self) -> Option<String> {
        self.auth.get_user_data().and_then(|claims| claims.sub)
    }

    pub async fn change_password(&mut self) -> Result<()> {
        self.error = None;
        self.success = None;
        if let Some(message) = self.password_form.problem() {
            debug!(%message, "Password form rejected");
            self.error = Some(message.clone());
            return Err(Error::Validation(message));
        }

        self.is_loading = true;
        let result = self
            .auth
            .update_password(&self.password_form.old_password, &self.password_form.new_password)
            .await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                self.password_form = PasswordChangeForm::default();
                self.success = Some(PASSWORD_CHANGED.to_string());
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// On success the session is gone and the user lands on the login view.
    /// On failure the user stays here with the message.
    pub async fn delete_account(&mut self) -> Result<Route> {
        self.error = None;
        self.success = None;
        self.is_loading = true;
        let result = self.auth.delete_account().await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                info!("Account removed, leaving profile");
                Ok(Route::Login)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn skills_error(&self) -> Option<&str> {
        self.skills_error.as_deref()
    }

    fn require_premium(&mut self) -> Result<()> {
        if self.is_premium() {
            return Ok(());
        }
        self.skills_error = Some(PREMIUM_ONLY.to_string());
        Err(Error::Validation(PREMIUM_ONLY.to_string()))
    }

    pub fn begin_skills_load(&mut self) -> Ticket {
        self.skills_sequencer.issue()
    }

    /// Applies a skills fetch unless a newer one has been started since.
    pub fn complete_skills_load(&mut self, ticket: Ticket, result: Result<SkillsResponse>) -> bool {
        if !self.skills_sequencer.is_current(ticket) {
            debug!(?ticket, "Dropping stale skills result");
            return false;
        }
        match result {
            Ok(response) => {
                self.skills = response.skills;
                self.skills_error = None;
            }
            Err(err) => self.skills_error = Some(err.to_string()),
        }
        true
    }

    pub async fn load_skills(&mut self) -> Result<()> {
        self.require_premium()?;
        let ticket = self.begin_skills_load();
        let result = self.skills_service.get_skills().await;
        let failed = result.as_ref().err().map(|err| err.to_string());
        self.complete_skills_load(ticket, result);
        match failed {
            Some(message) => Err(Error::service(message)),
            None => Ok(()),
        }
    }

    pub async fn add_skill(&mut self, input: &str) -> Result<()> {
        self.require_premium()?;
        let skill = input.trim();
        if skill.is_empty() {
            self.skills_error = Some(SKILL_REQUIRED.to_string());
            return Err(Error::Validation(SKILL_REQUIRED.to_string()));
        }
        let result = self.skills_service.add_skill(skill).await;
        self.after_mutation(result.map(|_| ())).await
    }

    pub async fn remove_skill(&mut self, skill: &str) -> Result<()> {
        self.require_premium()?;
        let result = self.skills_service.remove_skill(skill).await;
        self.after_mutation(result.map(|_| ())).await
    }

    pub async fn clear_skills(&mut self) -> Result<()> {
        self.require_premium()?;
        let result = self.skills_service.remove_all_skills().await;
        self.after_mutation(result.map(|_| ())).await
    }

    async fn after_mutation(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => self.load_skills().await,
            Err(err) => {
                self.skills_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::ApiClient;
    use crate::session::Session;

    fn profile() -> ProfileView {
        let config = Config::new("http://127.0.0.1:9").unwrap();
        let api = ApiClient::new(&config, Session::in_memory()).unwrap();
        ProfileView::new(AuthService::new(api.clone()), SkillsService::new(api))
    }

    #[test]
    fn password_form_checks_in_order() {
        assert_eq!(
            PasswordChangeForm::new("", "nova", "nova").problem().as_deref(),
            Some(FILL_ALL_FIELDS)
        );
        assert_eq!(
            PasswordChangeForm::new("velha", "nova", "").problem().as_deref(),
            Some(FILL_ALL_FIELDS)
        );
        assert_eq!(
            PasswordChangeForm::new("velha", "nova", "outra").problem().as_deref(),
            Some(PASSWORD_MISMATCH)
        );
        assert_eq!(
            PasswordChangeForm::new("mesma", "mesma", "mesma").problem().as_deref(),
            Some(PASSWORD_UNCHANGED)
        );
        assert_eq!(PasswordChangeForm::new("velha", "nova", "nova").problem(), None);
    }

    #[tokio::test]
    async fn invalid_password_form_never_reaches_the_server() {
        let mut view = profile();
        view.password_form = PasswordChangeForm::new("a", "b", "c");
        let err = view.change_password().await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(view.error(), Some(PASSWORD_MISMATCH));
    }

    #[test]
    fn sections_are_exclusive_and_clear_messages() {
        let mut view = profile();
        view.error = Some("x".into());
        view.toggle_section(ProfileSection::ChangePassword);
        assert_eq!(view.section(), Some(ProfileSection::ChangePassword));
        assert_eq!(view.error(), None);

        view.success = Some("y".into());
        view.toggle_section(ProfileSection::DeleteAccount);
        assert_eq!(view.section(), Some(ProfileSection::DeleteAccount));
        assert_eq!(view.success(), None);

        view.toggle_section(ProfileSection::DeleteAccount);
        assert_eq!(view.section(), None);
    }

    #[tokio::test]
    async fn skills_are_premium_only() {
        let mut view = profile();
        assert!(!view.is_premium());
        assert!(view.add_skill("Rust").await.is_err());
        assert_eq!(view.skills_error(), Some(PREMIUM_ONLY));
        assert!(view.load_skills().await.is_err());
    }

    #[test]
    fn stale_skills_load_is_dropped() {
        let mut view = profile();
        let first = view.begin_skills_load();
        let second = view.begin_skills_load();

        let response = |skills: &[&str]| -> Result<SkillsResponse> {
            Ok(SkillsResponse {
                skills: skills.iter().map(|s| s.to_string()).collect(),
                meta: None,
            })
        };
        assert!(view.complete_skills_load(second, response(&["Rust"])));
        assert!(!view.complete_skills_load(first, response(&["Java"])));
        assert_eq!(view.skills(), ["Rust"]);
    }
}
