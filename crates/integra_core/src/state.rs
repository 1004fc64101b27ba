use std::path::PathBuf;

use crate::view_model::AppViewModel;

/// Marker substring the backend places in the report of a valid contract.
pub const INTEGRITY_MARKER: &str = "CONTRATO ÍNTEGRO";

/// Monotonically increasing id attached to every submission. Only the
/// response carrying the current generation is applied.
pub type Generation = u64;

/// Visual state of the upload widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Dragging,
    Loading,
    Ok,
    Error,
}

/// Where the selected file's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on disk (browse dialog or native drop).
    Path(PathBuf),
    /// Bytes carried directly by the drop event.
    Bytes(Vec<u8>),
}

/// A contract file selected by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFile {
    pub name: String,
    pub source: FileSource,
}

impl ContractFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Bytes(bytes),
        }
    }
}

/// Returns true for the file extensions the analysis endpoint accepts.
pub fn is_supported_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".pdf") || lower.ends_with(".docx")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    upload: UploadState,
    report: Option<String>,
    error_message: Option<String>,
    generation: Generation,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            upload: self.upload,
            report: self.report.clone(),
            error_message: self.error_message.clone(),
        }
    }

    pub fn upload(&self) -> UploadState {
        self.upload
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new submission: bumps the generation, clears any previous
    /// result and enters `Loading`.
    pub(crate) fn begin_submission(&mut self) -> Generation {
        self.generation += 1;
        self.upload = UploadState::Loading;
        self.report = None;
        self.error_message = None;
        self.generation
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.upload = if dragging {
            UploadState::Dragging
        } else {
            UploadState::Idle
        };
    }

    /// Applies a backend report: the verdict is decided by the presence of
    /// [`INTEGRITY_MARKER`] in the report text.
    pub(crate) fn apply_report(&mut self, report: String) {
        self.upload = if report.contains(INTEGRITY_MARKER) {
            UploadState::Ok
        } else {
            UploadState::Error
        };
        self.report = Some(report);
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.upload = UploadState::Error;
        self.error_message = Some(message);
    }

    pub(crate) fn reject_unsupported(&mut self) {
        self.upload = UploadState::Error;
        self.report = None;
        self.error_message = Some("Formato não suportado.".to_string());
    }

    pub(crate) fn reset(&mut self) {
        self.upload = UploadState::Idle;
        self.report = None;
        self.error_message = None;
    }
}
