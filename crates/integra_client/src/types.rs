use std::fmt;
use std::path::PathBuf;

pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A contract to submit: original file name plus its bytes or location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractPayload {
    pub file_name: String,
    pub source: PayloadSource,
}

/// Free-text analysis report returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    AnalysisCompleted {
        generation: Generation,
        result: Result<AnalysisReport, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    Io,
    TooLarge { max_bytes: u64, actual: u64 },
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
    /// The backend answered with an `error` field instead of a report.
    Backend,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "file too large (max {max_bytes}, actual {actual})")
            }
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Backend => write!(f, "backend error"),
        }
    }
}
