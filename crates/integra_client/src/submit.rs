use async_trait::async_trait;
use integra_logging::{integra_debug, integra_info};
use serde::Deserialize;

use crate::{
    AnalysisReport, AnalyzeSettings, ContractPayload, FailureKind, PayloadSource, SubmitError,
};

/// Report text substituted when the backend omits the `result` field.
/// It contains no integrity marker, so classification yields a failure.
pub const MISSING_REPORT_PLACEHOLDER: &str = "Relatório não retornado.";

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    result: Option<String>,
    error: Option<String>,
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, payload: ContractPayload) -> Result<AnalysisReport, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    settings: AnalyzeSettings,
}

impl HttpAnalyzer {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self { settings }
    }

    fn endpoint(&self) -> Result<reqwest::Url, SubmitError> {
        let raw = format!("{}/analyze", self.settings.base_url.trim_end_matches('/'));
        reqwest::Url::parse(&raw)
            .map_err(|err| SubmitError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_payload(&self, payload: &ContractPayload) -> Result<Vec<u8>, SubmitError> {
        let bytes = match &payload.source {
            PayloadSource::Bytes(bytes) => bytes.clone(),
            PayloadSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|err| SubmitError::new(FailureKind::Io, err.to_string()))?,
        };
        let actual = bytes.len() as u64;
        if actual > self.settings.max_file_bytes {
            return Err(SubmitError::new(
                FailureKind::TooLarge {
                    max_bytes: self.settings.max_file_bytes,
                    actual,
                },
                "file too large",
            ));
        }
        Ok(bytes)
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else {
        "application/octet-stream"
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, payload: ContractPayload) -> Result<AnalysisReport, SubmitError> {
        let endpoint = self.endpoint()?;
        let client = self.build_client()?;
        let bytes = self.read_payload(&payload).await?;
        integra_info!(
            "Submitting {} ({} bytes) to {}",
            payload.file_name,
            bytes.len(),
            endpoint
        );

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(payload.file_name.clone())
            .mime_str(mime_for(&payload.file_name))
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            let message = if snippet.trim().is_empty() {
                status.to_string()
            } else {
                format!("{status}: {}", snippet.trim())
            };
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let parsed: AnalyzeResponse = response
            .json()
            .await
            .map_err(|err| SubmitError::new(FailureKind::MalformedResponse, err.to_string()))?;

        if let Some(message) = parsed.error {
            return Err(SubmitError::new(FailureKind::Backend, message));
        }

        let text = parsed
            .result
            .unwrap_or_else(|| MISSING_REPORT_PLACEHOLDER.to_string());
        integra_debug!("Report received ({} chars)", text.len());
        Ok(AnalysisReport { text })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
