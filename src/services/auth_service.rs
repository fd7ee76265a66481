use reqwest::StatusCode;
use tracing::{error, info, instrument};

use crate::dto::auth_dto::{Credentials, TokenResponse, UpdatePasswordRequest};
use crate::dto::Ack;
use crate::error::{ApiFailure, Error, Result};
use crate::models::Role;
use crate::services::api_client::{
    ApiClient, DELETE_ACCOUNT_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT,
    UPDATE_PASSWORD_ENDPOINT,
};
use crate::session::{Session, UserClaims};

pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";
pub const SERVER_ERROR: &str = "Erro no servidor. Tente novamente.";
pub const USER_EXISTS: &str = "Um usuário já existe com esse nome";
pub const INVALID_DATA: &str = "Dados inválidos. Verifique as informações.";
pub const WRONG_CURRENT_PASSWORD: &str = "Senha atual incorreta";
pub const NOT_AUTHORIZED: &str = "Não autorizado. Faça login novamente.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
}

/// Account operations plus the local session they create and destroy.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let payload = Credentials::new(username, password);
        let response: TokenResponse = self
            .api
            .post(LOGIN_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Login failed");
                login_error(&err)
            })?;

        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                error!("Login response carried no token");
                Error::service(SERVER_ERROR)
            })?;

        self.session().sign_in(&token)?;
        info!("User logged in");
        Ok(LoginOutcome { token })
    }

    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let payload = Credentials::new(username, password);
        self.api
            .post::<_, Option<Ack>>(REGISTER_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Registration failed");
                register_error(&err)
            })?;
        info!("User registered");
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn update_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let payload = UpdatePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.api
            .put::<_, Option<Ack>>(UPDATE_PASSWORD_ENDPOINT, &payload)
            .await
            .map_err(|err| {
                error!(error = %err, "Password update failed");
                update_password_error(&err)
            })?;
        info!("Password updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_account(&self) -> Result<()> {
        self.api
            .delete::<Option<Ack>>(DELETE_ACCOUNT_ENDPOINT)
            .await
            .map_err(|err| {
                error!(error = %err, "Account deletion failed");
                delete_account_error(&err)
            })?;
        self.session().logout()?;
        info!("Account deleted");
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.session().logout()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn get_token(&self) -> Option<String> {
        self.session().token()
    }

    pub fn get_user_data(&self) -> Option<UserClaims> {
        self.session().user_data()
    }

    pub fn get_user_role(&self) -> Role {
        self.session().role()
    }
}

fn login_error(failure: &ApiFailure) -> Error {
    match failure.status() {
        Some(StatusCode::UNAUTHORIZED) => Error::service(INVALID_CREDENTIALS),
        _ => Error::service(SERVER_ERROR),
    }
}

fn register_error(failure: &ApiFailure) -> Error {
    match failure.status() {
        Some(StatusCode::CONFLICT) => Error::service(USER_EXISTS),
        Some(StatusCode::BAD_REQUEST) => Error::service(INVALID_DATA),
        _ => Error::service(SERVER_ERROR),
    }
}

fn update_password_error(failure: &ApiFailure) -> Error {
    match failure.status() {
        Some(StatusCode::FORBIDDEN) => Error::service(WRONG_CURRENT_PASSWORD),
        Some(StatusCode::BAD_REQUEST) => Error::service(INVALID_DATA),
        _ => Error::service(SERVER_ERROR),
    }
}

fn delete_account_error(failure: &ApiFailure) -> Error {
    match failure.status() {
        Some(StatusCode::UNAUTHORIZED) => Error::service(NOT_AUTHORIZED),
        _ => Error::service(SERVER_ERROR),
    }
}
