use crate::UploadState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub upload: UploadState,
    pub report: Option<String>,
    pub error_message: Option<String>,
}
