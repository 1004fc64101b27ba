use crate::{is_supported_extension, AppState, ContractFile, Effect, Msg, UploadState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilePicked(file) | Msg::FileDropped(Some(file)) => submit(&mut state, file),
        Msg::FileDropped(None) => {
            // A drop without a file is silently ignored; only the drag
            // highlight is cleared.
            if state.upload() == UploadState::Dragging {
                state.set_dragging(false);
            }
            Vec::new()
        }
        Msg::DragEntered => {
            // The highlight is only shown from Idle. Drops themselves are
            // accepted in every state, so nothing is lost by ignoring the
            // hover elsewhere.
            if state.upload() == UploadState::Idle {
                state.set_dragging(true);
            }
            Vec::new()
        }
        Msg::DragLeft => {
            if state.upload() == UploadState::Dragging {
                state.set_dragging(false);
            }
            Vec::new()
        }
        Msg::AnalysisDone { generation, result } => {
            // Only the response for the latest submission is applied; a
            // stale generation means a newer request superseded this one.
            if generation == state.generation() && state.upload() == UploadState::Loading {
                match result {
                    Ok(report) => state.apply_report(report),
                    Err(message) => state.apply_failure(message),
                }
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            if matches!(state.upload(), UploadState::Ok | UploadState::Error) {
                state.reset();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState, file: ContractFile) -> Vec<Effect> {
    if !is_supported_extension(&file.name) {
        state.reject_unsupported();
        return Vec::new();
    }
    let generation = state.begin_submission();
    vec![Effect::SubmitContract { generation, file }]
}
