// GitHub user lookup library
// Loads a token from the environment and fetches the authenticated user

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod verbosity;

// Re-export commonly used types
pub use app::{RunOptions, run};
pub use client::GitHubClient;
pub use config::{EnvFile, Settings, Token};
pub use error::{ApiError, AppError, ConfigError, report};
pub use output::OutputFormat;

// Constants
pub const API_BASE_URL: &str = "https://api.github.com";
pub const USER_PATH: &str = "/user";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
