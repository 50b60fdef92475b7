use predictor_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn submit_with_empty_input_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
