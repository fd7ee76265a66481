use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::no_whitespace;

pub const FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos";
pub const USERNAME_HAS_SPACES: &str = "O nome de usuário não pode conter espaços";
pub const PASSWORD_HAS_SPACES: &str = "A senha não pode conter espaços";

/// Body of both `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(
        length(min = 1, code = "required", message = "Por favor, preencha todos os campos"),
        custom(function = "no_whitespace", message = "O nome de usuário não pode conter espaços")
    )]
    pub username: String,
    #[validate(
        length(min = 1, code = "required", message = "Por favor, preencha todos os campos"),
        custom(function = "no_whitespace", message = "A senha não pode conter espaços")
    )]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
