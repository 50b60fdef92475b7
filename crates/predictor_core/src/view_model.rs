use crate::state::INITIAL_RESULT;

/// How the progress indicator should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerMode {
    /// Percentage known; show it.
    Determinate,
    /// Request in flight, no percentage reported yet.
    Indeterminate,
}

/// Transient notification shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictViewModel {
    pub input_value: String,
    pub result: String,
    pub error: String,
    pub in_progress: bool,
    pub spinner_mode: SpinnerMode,
    pub spinner_value: u32,
    pub toast: Option<ToastView>,
    pub dirty: bool,
}

impl Default for PredictViewModel {
    fn default() -> Self {
        Self {
            input_value: String::new(),
            result: INITIAL_RESULT.to_string(),
            error: String::new(),
            in_progress: false,
            spinner_mode: SpinnerMode::Determinate,
            spinner_value: 0,
            toast: None,
            dirty: false,
        }
    }
}
