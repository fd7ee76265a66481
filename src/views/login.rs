use tracing::debug;

use crate::dto::auth_dto::Credentials;
use crate::error::{Error, Result};
use crate::routes::Route;
use crate::services::AuthService;

use super::register::{credentials_error, strip_whitespace, RegisterView};

pub const REGISTRATION_SUCCESS: &str =
    "Cadastro criado com sucesso! Faça login com suas credenciais.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    Register,
}

/// The `/login` screen: sign-in form with a switch to registration.
pub struct LoginView {
    auth: AuthService,
    credentials: Credentials,
    register: RegisterView,
    mode: FormMode,
    error: Option<String>,
    notice: Option<String>,
    is_loading: bool,
}

impl LoginView {
    pub fn new(auth: AuthService) -> Self {
        Self {
            register: RegisterView::new(auth.clone()),
            auth,
            credentials: Credentials::default(),
            mode: FormMode::SignIn,
            error: None,
            notice: None,
            is_loading: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_username(&mut self, input: &str) {
        match self.mode {
            FormMode::SignIn => self.credentials.username = strip_whitespace(input),
            FormMode::Register => self.register.set_username(input),
        }
    }

    pub fn set_password(&mut self, input: &str) {
        match self.mode {
            FormMode::SignIn => self.credentials.password = strip_whitespace(input),
            FormMode::Register => self.register.set_password(input),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        match self.mode {
            FormMode::SignIn => &self.credentials,
            FormMode::Register => self.register.credentials(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.mode {
            FormMode::SignIn => self.error.as_deref(),
            FormMode::Register => self.register.error(),
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading || self.register.is_loading()
    }

    pub fn show_register(&mut self) {
        self.mode = FormMode::Register;
        self.error = None;
        self.notice = None;
        self.register.reset();
    }

    pub fn show_sign_in(&mut self) {
        self.mode = FormMode::SignIn;
        self.error = None;
        self.register.reset();
    }

    /// Submits whichever form is showing. A successful sign-in routes to
    /// the board; a successful registration returns to the sign-in form
    /// with a notice and no route change.
    pub async fn submit(&mut self) -> Result<Option<Route>> {
        match self.mode {
            FormMode::SignIn => self.sign_in().await.map(Some),
            FormMode::Register => {
                self.register.submit().await?;
                self.mode = FormMode::SignIn;
                self.credentials = Credentials::default();
                self.register.reset();
                self.error = None;
                self.notice = Some(REGISTRATION_SUCCESS.to_string());
                Ok(None)
            }
        }
    }

    async fn sign_in(&mut self) -> Result<Route> {
        self.error = None;
        self.notice = None;
        if let Some(message) = credentials_error(&self.credentials) {
            debug!(%message, "Login form rejected");
            self.error = Some(message.clone());
            return Err(Error::Validation(message));
        }

        self.is_loading = true;
        let result = self
            .auth
            .login(&self.credentials.username, &self.credentials.password)
            .await;
        self.is_loading = false;

        match result {
            Ok(_) => Ok(Route::Home),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
