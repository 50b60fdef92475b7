use crate::state::REQUEST_URL;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Presence is the only input validation. An in-flight request is
            // deliberately not guarded against; the last response wins.
            if state.input_value().is_empty() {
                return (state, Vec::new());
            }
            let value = state.input_value().to_owned();
            state.begin_request();
            vec![Effect::PostPrediction {
                url: REQUEST_URL.to_owned(),
                value,
            }]
        }
        Msg::ItemReceived { value, progress } => {
            state.apply_item(value, progress);
            Vec::new()
        }
        Msg::RequestFailed(message) => {
            state.apply_failure(message);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_tick();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
