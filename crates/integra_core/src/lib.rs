//! Integra core: pure upload state machine and verdict classification.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    is_supported_extension, AppState, ContractFile, FileSource, Generation, UploadState,
    INTEGRITY_MARKER,
};
pub use update::update;
pub use view_model::AppViewModel;
