// Rendering of the decoded response for stdout
use serde_json::Value;

/// Printed once the token has been read. It says nothing about validity.
pub const TOKEN_LOADED_MESSAGE: &str = "Token carregado do ambiente.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}

pub fn render(value: &Value, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Compact => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
}
