use crate::view_model::{PredictViewModel, SpinnerMode, ToastView};

/// Result text shown before the first response arrives.
pub const INITIAL_RESULT: &str = "No results to show yet...";

/// Fixed request URL the backend expects alongside the user's text.
pub const REQUEST_URL: &str = "http://aaa.com";

/// Toast lifetime in ticks: 5 s at the app shell's 75 ms tick interval.
pub const TOAST_DURATION_TICKS: u64 = 67;

pub(crate) const TOAST_MESSAGE: &str = "Predicting correct words...";
pub(crate) const TOAST_ACTION: &str = "Requested!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input_value: String,
    result: String,
    error: String,
    in_progress: bool,
    spinner_mode: SpinnerMode,
    spinner_value: u32,
    toast: Option<Toast>,
    tick: u64,
    dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    message: String,
    action: String,
    expires_at_tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input_value: String::new(),
            result: INITIAL_RESULT.to_string(),
            error: String::new(),
            in_progress: false,
            spinner_mode: SpinnerMode::Determinate,
            spinner_value: 0,
            toast: None,
            tick: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PredictViewModel {
        PredictViewModel {
            input_value: self.input_value.clone(),
            result: self.result.clone(),
            error: self.error.clone(),
            in_progress: self.in_progress,
            spinner_mode: self.spinner_mode,
            spinner_value: self.spinner_value,
            toast: self.toast.as_ref().map(|toast| ToastView {
                message: toast.message.clone(),
                action: toast.action.clone(),
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn input_value(&self) -> &str {
        &self.input_value
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_value != text {
            self.input_value = text;
            self.dirty = true;
        }
    }

    /// Flips the UI into "in progress, indeterminate" and raises the toast.
    pub(crate) fn begin_request(&mut self) {
        self.in_progress = true;
        self.spinner_mode = SpinnerMode::Indeterminate;
        self.toast = Some(Toast {
            message: TOAST_MESSAGE.to_string(),
            action: TOAST_ACTION.to_string(),
            expires_at_tick: self.tick + TOAST_DURATION_TICKS,
        });
        self.dirty = true;
    }

    /// Overwrites the display with the backend's answer.
    ///
    /// The request stays in progress while the reported percentage is
    /// below 100.
    pub(crate) fn apply_item(&mut self, value: String, progress: u32) {
        self.result = value;
        self.in_progress = progress < 100;
        self.spinner_mode = SpinnerMode::Determinate;
        self.spinner_value = progress;
        self.dirty = true;
    }

    /// Stores the failure string for display; the prior result is kept.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = message;
        self.dirty = true;
    }

    pub(crate) fn advance_tick(&mut self) {
        self.tick += 1;
        let expired = self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at_tick <= self.tick);
        if expired {
            self.toast = None;
            self.dirty = true;
        }
    }
}
