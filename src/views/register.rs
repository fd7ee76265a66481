use tracing::debug;

use crate::dto::auth_dto::{Credentials, FILL_ALL_FIELDS};
use crate::error::{Error, Result};
use crate::services::AuthService;
use crate::utils::validation::{first_code, first_message, validate};

/// Removes every whitespace character, as the credential inputs do while
/// the user types.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// First problem with `credentials`: missing fields, then whitespace in the
/// username, then whitespace in the password.
pub fn credentials_error(credentials: &Credentials) -> Option<String> {
    let errors = validate(credentials).err()?;

    let missing = ["username", "password"]
        .iter()
        .any(|field| first_code(&errors, field).as_deref() == Some("required"));
    if missing {
        return Some(FILL_ALL_FIELDS.to_string());
    }

    first_message(&errors, "username").or_else(|| first_message(&errors, "password"))
}

/// Account creation form.
pub struct RegisterView {
    auth: AuthService,
    credentials: Credentials,
    error: Option<String>,
    is_loading: bool,
}

impl RegisterView {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            credentials: Credentials::default(),
            error: None,
            is_loading: false,
        }
    }

    pub fn set_username(&mut self, input: &str) {
        self.credentials.username = strip_whitespace(input);
    }

    pub fn set_password(&mut self, input: &str) {
        self.credentials.password = strip_whitespace(input);
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn reset(&mut self) {
        self.credentials = Credentials::default();
        self.error = None;
    }

    /// Validates locally, then creates the account. The failure message is
    /// kept for display and also returned.
    pub async fn submit(&mut self) -> Result<()> {
        self.error = None;
        if let Some(message) = credentials_error(&self.credentials) {
            debug!(%message, "Registration form rejected");
            self.error = Some(message.clone());
            return Err(Error::Validation(message));
        }

        self.is_loading = true;
        let result = self
            .auth
            .register(&self.credentials.username, &self.credentials.password)
            .await;
        self.is_loading = false;

        if let Err(err) = &result {
            self.error = Some(err.to_string());
        }
        result
    }
}
