// Run sequence - load credential, call the API once, print the result
use crate::client::GitHubClient;
use crate::config::{self, EnvFile, Settings};
use crate::error::AppError;
use crate::output::{self, OutputFormat, TOKEN_LOADED_MESSAGE};
use crate::API_BASE_URL;
use std::env::VarError;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub env_file: EnvFile,
    pub format: OutputFormat,
    pub api_log: Option<PathBuf>,
    pub api_base_url: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            env_file: EnvFile::default(),
            format: OutputFormat::default(),
            api_log: None,
            api_base_url: API_BASE_URL.to_string(),
        }
    }
}

/// Load the token through `lookup` and print the authenticated user to `out`.
///
/// A missing token returns before any client is built, so no request is sent.
pub async fn run<F, W>(options: &RunOptions, lookup: F, out: &mut W) -> Result<(), AppError>
where
    F: Fn(&str) -> Result<String, VarError>,
    W: Write,
{
    config::load_env_file(&options.env_file)?;

    let settings = Settings::from_lookup(lookup)?.with_api_base_url(options.api_base_url.clone());
    writeln!(out, "{}", TOKEN_LOADED_MESSAGE)?;

    let mut client = GitHubClient::new(&settings)?;
    client.set_api_logging(options.api_log.clone());

    let user = client.get_user().await?;
    if let Some(login) = user.get("login").and_then(|v| v.as_str()) {
        info!(login, "📊 Authenticated user fetched");
    }

    writeln!(out, "{}", output::render(&user, options.format)?)?;
    out.flush()?;
    Ok(())
}
