use std::sync::Once;

use integra_core::{
    is_supported_extension, update, AppState, ContractFile, Msg, UploadState, INTEGRITY_MARKER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(integra_logging::initialize_for_tests);
}

fn docx() -> ContractFile {
    ContractFile::from_path("contrato.docx".into())
}

#[test]
fn drag_enter_highlights_only_from_idle() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::DragEntered);
    assert_eq!(state.view().upload, UploadState::Dragging);
    assert!(effects.is_empty());

    // After a verdict the highlight is not shown; the drop itself would
    // still be accepted.
    let (state, _effects) = update(state, Msg::FileDropped(Some(docx())));
    let (state, _effects) = update(
        state,
        Msg::AnalysisDone {
            generation: 1,
            result: Ok(format!("Resultado: {INTEGRITY_MARKER}")),
        },
    );
    let (state, _effects) = update(state, Msg::DragEntered);
    assert_eq!(state.view().upload, UploadState::Ok);
}

#[test]
fn drag_leave_resets_highlight() {
    init_logging();
    let (state, _effects) = update(AppState::new(), Msg::DragEntered);

    let (next, effects) = update(state, Msg::DragLeft);

    assert_eq!(next.view().upload, UploadState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn drop_without_file_is_ignored() {
    init_logging();

    let (state, effects) = update(AppState::new(), Msg::FileDropped(None));
    assert_eq!(state.view().upload, UploadState::Idle);
    assert_eq!(state.view().error_message, None);
    assert!(effects.is_empty());

    // While dragging, only the highlight is cleared.
    let (state, _effects) = update(state, Msg::DragEntered);
    let (state, effects) = update(state, Msg::FileDropped(None));
    assert_eq!(state.view().upload, UploadState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn drop_while_dragging_submits() {
    init_logging();
    let (state, _effects) = update(AppState::new(), Msg::DragEntered);

    let (next, effects) = update(state, Msg::FileDropped(Some(docx())));

    assert_eq!(next.view().upload, UploadState::Loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn unsupported_extension_is_rejected_without_a_request() {
    init_logging();
    let file = ContractFile::from_path("contrato.txt".into());

    let (next, effects) = update(AppState::new(), Msg::FilePicked(file));
    let view = next.view();

    assert_eq!(view.upload, UploadState::Error);
    assert!(!view.error_message.unwrap().is_empty());
    assert!(effects.is_empty());
}

#[test]
fn extension_check_is_case_insensitive() {
    init_logging();

    assert!(is_supported_extension("CONTRATO.PDF"));
    assert!(is_supported_extension("Contrato.Docx"));
    assert!(!is_supported_extension("contrato.doc"));
    assert!(!is_supported_extension("contrato"));
}
