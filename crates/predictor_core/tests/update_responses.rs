use std::sync::Once;

use predictor_core::{update, AppState, Msg, SpinnerMode, INITIAL_RESULT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn submitted(input: &str) -> AppState {
    let state = AppState::new();
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    state
}

#[test]
fn partial_item_keeps_request_in_progress() {
    init_logging();
    let state = submitted("cats");

    let (state, effects) = update(
        state,
        Msg::ItemReceived {
            value: "working on it".to_string(),
            progress: 40,
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(view.in_progress);
    assert_eq!(view.spinner_mode, SpinnerMode::Determinate);
    assert_eq!(view.spinner_value, 40);
    assert_eq!(view.result, "working on it");
}

#[test]
fn terminal_item_clears_in_progress_and_shows_value() {
    init_logging();
    let state = submitted("cats");

    let (state, _effects) = update(
        state,
        Msg::ItemReceived {
            value: "cats win".to_string(),
            progress: 100,
        },
    );
    let view = state.view();

    assert!(!view.in_progress);
    assert_eq!(view.spinner_value, 100);
    assert_eq!(view.result, "cats win");
}

#[test]
fn failure_sets_error_and_keeps_prior_result() {
    init_logging();
    let state = submitted("cats");

    let (state, effects) = update(state, Msg::RequestFailed("503 - Service Unavailable".to_string()));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.error, "503 - Service Unavailable");
    assert_eq!(view.result, INITIAL_RESULT);
    // The error path does not touch the spinner; the request still looks
    // in flight.
    assert!(view.in_progress);
    assert_eq!(view.spinner_mode, SpinnerMode::Indeterminate);
}

#[test]
fn failure_after_item_keeps_last_result() {
    init_logging();
    let state = submitted("dogs");
    let (state, _) = update(
        state,
        Msg::ItemReceived {
            value: "dogs win".to_string(),
            progress: 100,
        },
    );

    let (state, _) = update(state, Msg::RequestFailed("connection refused".to_string()));
    let view = state.view();

    assert_eq!(view.result, "dogs win");
    assert_eq!(view.error, "connection refused");
}
