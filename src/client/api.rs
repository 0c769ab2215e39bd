use crate::config::{Settings, Token};
use crate::error::ApiError;
use crate::models::GitHubErrorBody;
use crate::{GITHUB_MEDIA_TYPE, USER_AGENT, USER_PATH};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Headers sent with every request: `Authorization: token <TOKEN>` and the v3 media type
pub fn build_headers(token: &Token) -> Result<HeaderMap, ApiError> {
    let mut authorization = HeaderValue::from_str(&token.authorization_value())?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    Ok(headers)
}

#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    api_log: Option<PathBuf>,
}

impl GitHubClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .default_headers(build_headers(&settings.token)?)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: settings.api_base_url.clone(),
            api_log: None,
        })
    }

    /// Append a record of every call to `path`. Request headers are never written.
    pub fn set_api_logging(&mut self, path: Option<PathBuf>) {
        self.api_log = path;
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: Option<&str>) {
        let Some(path) = &self.api_log else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            response_body = response_body.unwrap_or("Not captured")
        );

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(log_entry.as_bytes()) {
                    warn!(path = %path.display(), error = %e, "Failed to write API log");
                }
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to open API log"),
        }
    }

    /// Fetch the authenticated user (`GET /user`)
    pub async fn get_user(&self) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, USER_PATH);
        debug!(%url, "Sending GitHub API request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, status.as_u16(), Some(&error_body));
            warn!(status = status.as_u16(), "GitHub API request failed");
            return Err(ApiError::Status {
                status,
                message: GitHubErrorBody::message_from(&error_body),
            });
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, status.as_u16(), Some(&response_text));
        info!(status = status.as_u16(), "✅ GitHub API request succeeded");

        serde_json::from_str(&response_text).map_err(|source| ApiError::Decode { source })
    }
}
