// Credential loading - env file merge and GITHUB_TOKEN lookup
use crate::error::ConfigError;
use crate::{API_BASE_URL, TOKEN_ENV_VAR};
use std::env::{self, VarError};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

const ENV_FILE_NAME: &str = ".env";

/// Opaque GitHub credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw value; empty strings are treated as a missing credential
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token
    pub fn authorization_value(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(****)")
    }
}

/// Where to look for the key-value file merged into the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnvFile {
    /// `.env` in the current directory or one of its parents, if any
    #[default]
    Search,
    /// An explicit file that must exist
    Path(PathBuf),
    /// Skip the merge entirely
    Disabled,
}

/// First `.env` in the current directory or one of its parents
fn find_env_file() -> Result<Option<PathBuf>, ConfigError> {
    let cwd = env::current_dir().map_err(|e| ConfigError::EnvFile {
        path: PathBuf::from("."),
        source: dotenvy::Error::Io(e),
    })?;
    Ok(cwd.ancestors().map(|dir| dir.join(ENV_FILE_NAME)).find(|candidate| candidate.is_file()))
}

/// Merge an env file into the process environment.
///
/// Variables that are already set keep their values. Returns the path that
/// was loaded, or `None` when nothing was.
pub fn load_env_file(source: &EnvFile) -> Result<Option<PathBuf>, ConfigError> {
    let path = match source {
        EnvFile::Disabled => {
            debug!("Env file loading disabled");
            return Ok(None);
        }
        EnvFile::Search => match find_env_file()? {
            Some(path) => path,
            None => {
                debug!("No .env file found, using process environment only");
                return Ok(None);
            }
        },
        EnvFile::Path(path) => path.clone(),
    };

    dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "📋 Loaded env file");
    Ok(Some(path))
}

/// Lookup against the real process environment
pub fn process_env(key: &str) -> Result<String, VarError> {
    env::var(key)
}

/// Read the token through `lookup`, which behaves like `std::env::var`
pub fn load_token_from<F>(lookup: F) -> Result<Token, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let value = match lookup(TOKEN_ENV_VAR) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Err(ConfigError::MissingCredential),
        Err(VarError::NotUnicode(_)) => return Err(ConfigError::InvalidCredential),
    };
    let token = Token::new(value)?;
    debug!(var = TOKEN_ENV_VAR, "Token found");
    Ok(token)
}

/// Read the token from the process environment
pub fn load_token() -> Result<Token, ConfigError> {
    load_token_from(process_env)
}

/// Everything the API call needs, built once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: Token,
    pub api_base_url: String,
}

impl Settings {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            api_base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self::new(load_token_from(lookup)?))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(load_token()?))
    }

    /// Point the client somewhere other than api.github.com
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}
