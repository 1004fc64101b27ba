//! Integra client: multipart submission of contracts to the analysis endpoint.
mod handle;
mod settings;
mod submit;
mod types;

pub use handle::ClientHandle;
pub use settings::{AnalyzeSettings, SettingsError, BASE_URL_ENV};
pub use submit::{Analyzer, HttpAnalyzer, MISSING_REPORT_PLACEHOLDER};
pub use types::{
    AnalysisReport, ClientEvent, ContractPayload, FailureKind, Generation, PayloadSource,
    SubmitError,
};
