// Error types for credential loading, the API call and the run sequence
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `GITHUB_TOKEN` is unset or empty
    #[error("Token não encontrado!")]
    MissingCredential,

    /// `GITHUB_TOKEN` is set but is not valid UTF-8
    #[error("GITHUB_TOKEN is set but is not valid UTF-8")]
    InvalidCredential,

    /// The env file could not be read or parsed
    #[error("Failed to load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Failures of the single GitHub API call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The token contains bytes that cannot appear in a header value
    #[error("Token cannot be used as an Authorization header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Connection, TLS or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("GitHub API request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// A 2xx body that is not valid JSON
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Status code of the reply, when the server sent one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Everything that can end a run early
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to render response: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Api(_) | AppError::Render(_) | AppError::Output(_) => 1,
        }
    }
}

/// Line written to stderr for a failed run. The missing-token message is printed bare.
pub fn report(error: &AppError) -> String {
    match error {
        AppError::Config(ConfigError::MissingCredential) => error.to_string(),
        _ => format!("❌ {}", error),
    }
}
