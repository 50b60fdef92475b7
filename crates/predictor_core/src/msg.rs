#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the prediction input box.
    InputChanged(String),
    /// User submitted the current input for prediction.
    SubmitClicked,
    /// Backend answered with a result string and completion percentage.
    ItemReceived { value: String, progress: u32 },
    /// The request failed; the payload is the display string for the UI.
    RequestFailed(String),
    /// UI/render tick to coalesce rendering and expire the toast.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
