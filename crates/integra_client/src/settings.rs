use std::time::Duration;

use thiserror::Error;

/// Environment variable that overrides the default analysis endpoint.
pub const BASE_URL_ENV: &str = "INTEGRA_BASE_URL";

#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    /// Base URL of the analysis service; requests go to `{base_url}/analyze`.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// The backend runs an LLM pass per document, so this is generous.
    pub request_timeout: Duration,
    pub max_file_bytes: u64,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_file_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("INTEGRA_BASE_URL is not valid UTF-8")]
    NotUnicode,
}

impl AnalyzeSettings {
    /// Default settings with the base URL taken from [`BASE_URL_ENV`] when set.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                settings.base_url = value.trim().trim_end_matches('/').to_string();
            }
            Ok(_) | Err(std::env::VarError::NotPresent) => {}
            Err(std::env::VarError::NotUnicode(_)) => return Err(SettingsError::NotUnicode),
        }
        Ok(settings)
    }
}
