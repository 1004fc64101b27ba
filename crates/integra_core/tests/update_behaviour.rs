use std::sync::Once;

use integra_core::{update, AppState, ContractFile, Effect, Msg, UploadState, INTEGRITY_MARKER};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(integra_logging::initialize_for_tests);
}

fn pdf() -> ContractFile {
    ContractFile::from_path("contrato.pdf".into())
}

fn loading_state() -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::FilePicked(pdf()));
    state
}

#[test]
fn picked_file_starts_loading_and_emits_submit() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state, Msg::FilePicked(pdf()));
    let view = next.view();

    assert_eq!(view.upload, UploadState::Loading);
    assert_eq!(view.report, None);
    assert_eq!(view.error_message, None);
    assert_eq!(
        effects,
        vec![Effect::SubmitContract {
            generation: 1,
            file: pdf(),
        }]
    );
}

#[test]
fn report_with_marker_ends_ok() {
    init_logging();
    let report = format!("Resultado: {INTEGRITY_MARKER}\n\nRequisitos atendidos.");

    let (next, effects) = update(
        loading_state(),
        Msg::AnalysisDone {
            generation: 1,
            result: Ok(report.clone()),
        },
    );

    assert_eq!(next.view().upload, UploadState::Ok);
    assert_eq!(next.view().report, Some(report));
    assert_eq!(next.view().error_message, None);
    assert!(effects.is_empty());
}

#[test]
fn report_without_marker_ends_error() {
    init_logging();
    let report = "Resultado: CONTRATO NÃO ÍNTEGRO\n\nPontos críticos.".to_string();

    let (next, _effects) = update(
        loading_state(),
        Msg::AnalysisDone {
            generation: 1,
            result: Ok(report.clone()),
        },
    );

    // The report is still shown; only the verdict differs.
    assert_eq!(next.view().upload, UploadState::Error);
    assert_eq!(next.view().report, Some(report));
    assert_eq!(next.view().error_message, None);
}

#[test]
fn transport_failure_ends_error_with_message() {
    init_logging();

    let (next, _effects) = update(
        loading_state(),
        Msg::AnalysisDone {
            generation: 1,
            result: Err("Falha ao analisar o contrato.".to_string()),
        },
    );
    let view = next.view();

    assert_eq!(view.upload, UploadState::Error);
    assert_eq!(view.report, None);
    assert!(!view.error_message.unwrap().is_empty());
}

#[test]
fn stale_response_is_ignored_latest_request_wins() {
    init_logging();
    let state = loading_state();

    // A second drop mid-flight supersedes the first request.
    let (state, effects) = update(state, Msg::FileDropped(Some(pdf())));
    assert_eq!(state.view().upload, UploadState::Loading);
    assert_eq!(
        effects,
        vec![Effect::SubmitContract {
            generation: 2,
            file: pdf(),
        }]
    );

    // The first response arrives late and must not be applied.
    let (state, _effects) = update(
        state,
        Msg::AnalysisDone {
            generation: 1,
            result: Ok(format!("Resultado: {INTEGRITY_MARKER}")),
        },
    );
    assert_eq!(state.view().upload, UploadState::Loading);

    // The latest response decides the outcome.
    let (state, _effects) = update(
        state,
        Msg::AnalysisDone {
            generation: 2,
            result: Ok("Resultado: CONTRATO NÃO ÍNTEGRO".to_string()),
        },
    );
    assert_eq!(state.view().upload, UploadState::Error);
}

#[test]
fn reset_returns_to_idle_and_clears_text() {
    init_logging();
    let (state, _effects) = update(
        loading_state(),
        Msg::AnalysisDone {
            generation: 1,
            result: Err("Falha ao analisar o contrato.".to_string()),
        },
    );

    let (next, effects) = update(state, Msg::ResetClicked);
    let view = next.view();

    assert_eq!(view.upload, UploadState::Idle);
    assert_eq!(view.report, None);
    assert_eq!(view.error_message, None);
    assert!(effects.is_empty());
}

#[test]
fn reset_is_ignored_while_loading() {
    init_logging();

    let (next, effects) = update(loading_state(), Msg::ResetClicked);

    assert_eq!(next.view().upload, UploadState::Loading);
    assert!(effects.is_empty());
}

#[test]
fn resubmission_after_verdict_clears_previous_report() {
    init_logging();
    let (state, _effects) = update(
        loading_state(),
        Msg::AnalysisDone {
            generation: 1,
            result: Ok(format!("Resultado: {INTEGRITY_MARKER}")),
        },
    );
    assert_eq!(state.view().upload, UploadState::Ok);

    // Implicit re-drop from a verdict state starts over.
    let (next, effects) = update(state, Msg::FileDropped(Some(pdf())));
    let view = next.view();

    assert_eq!(view.upload, UploadState::Loading);
    assert_eq!(view.report, None);
    assert_eq!(view.error_message, None);
    assert_eq!(
        effects,
        vec![Effect::SubmitContract {
            generation: 2,
            file: pdf(),
        }]
    );
}
