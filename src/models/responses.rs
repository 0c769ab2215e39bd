use serde::{Deserialize, Serialize};

/// Error envelope GitHub sends with non-2xx replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubErrorBody {
    pub message: String,
    pub documentation_url: Option<String>,
}

impl GitHubErrorBody {
    /// Best-effort message for an error reply; falls back to the raw body
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<GitHubErrorBody>(body) {
            Ok(parsed) => match parsed.documentation_url {
                Some(url) => format!("{} ({})", parsed.message, url),
                None => parsed.message,
            },
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_github_error() {
        let body = r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#;
        assert_eq!(
            GitHubErrorBody::message_from(body),
            "Bad credentials (https://docs.github.com/rest)"
        );
    }

    #[test]
    fn test_message_without_documentation_url() {
        assert_eq!(GitHubErrorBody::message_from(r#"{"message":"Not Found"}"#), "Not Found");
    }

    #[test]
    fn test_message_falls_back_to_raw_body() {
        assert_eq!(GitHubErrorBody::message_from("upstream timeout\n"), "upstream timeout");
        assert_eq!(GitHubErrorBody::message_from(""), "empty response body");
    }
}
