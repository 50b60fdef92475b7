#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the user's text to the prediction endpoint.
    PostPrediction { url: String, value: String },
}
