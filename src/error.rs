use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected before any network call; the message is shown inline as is.
    #[error("{0}")]
    Validation(String),

    /// A server call failed. `message` is the user-facing text for the
    /// operation; `status` is only carried where a view branches on it.
    #[error("{message}")]
    Service {
        message: String,
        status: Option<u16>,
    },

    #[error("Session store error: {0}")]
    Session(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn service(message: impl Into<String>) -> Self {
        Error::Service {
            message: message.into(),
            status: None,
        }
    }

    pub fn service_with_status(message: impl Into<String>, status: StatusCode) -> Self {
        Error::Service {
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => *status,
            _ => None,
        }
    }
}

/// Raw failure of a server call, before an operation maps it to a message.
#[derive(Debug, thiserror::Error)]
pub enum ApiFailure {
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiFailure {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiFailure::Status { status, .. } => Some(*status),
            ApiFailure::Transport(err) => err.status(),
            ApiFailure::Decode(_) => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiFailure>;
