use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiFailure, ApiResult, Result};
use crate::middleware::{auth::attach_bearer, unauthorized::observe_status};
use crate::session::Session;

pub const JOBS_ENDPOINT: &str = "/api/jobs";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const UPDATE_PASSWORD_ENDPOINT: &str = "/api/auth/update-password";
pub const DELETE_ACCOUNT_ENDPOINT: &str = "/api/auth/delete-account";
pub const SKILLS_ENDPOINT: &str = "/api/skills";
pub const ANALYSIS_ENDPOINT: &str = "/api/analysis";

/// The one configured HTTP client every service goes through.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<R>(&self, endpoint: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::GET, endpoint, None).await
    }

    pub async fn post<T, R>(&self, endpoint: &str, payload: &T) -> ApiResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.execute(Method::POST, endpoint, Some(payload)).await
    }

    pub async fn put<T, R>(&self, endpoint: &str, payload: &T) -> ApiResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.execute(Method::PUT, endpoint, Some(payload)).await
    }

    pub async fn delete<R>(&self, endpoint: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::DELETE, endpoint, None).await
    }

    async fn execute<T, R>(&self, method: Method, endpoint: &str, payload: Option<&T>) -> ApiResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!(%method, %url, "Sending API request");

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        let builder = attach_bearer(builder, &self.session);

        let response = builder.send().await.map_err(|err| {
            warn!(%method, %url, error = %err, "API request failed before a response");
            ApiFailure::Transport(err)
        })?;

        let status = response.status();
        debug!(%method, %url, %status, "API response received");

        if !status.is_success() {
            observe_status(status, &self.session);
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiFailure::Status { status, body });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
