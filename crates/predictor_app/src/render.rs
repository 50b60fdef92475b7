use predictor_core::{PredictViewModel, SpinnerMode};

const BAR_WIDTH: u32 = 20;

/// Renders the view model as lines of terminal text.
pub fn render(view: &PredictViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(toast) = &view.toast {
        lines.push(format!("* {} [{}]", toast.message, toast.action));
    }

    let status = if view.in_progress {
        match view.spinner_mode {
            SpinnerMode::Indeterminate => "Status: working...".to_string(),
            SpinnerMode::Determinate => format!(
                "Status: [{}] {}%",
                progress_bar(view.spinner_value),
                view.spinner_value
            ),
        }
    } else {
        "Status: idle".to_string()
    };
    lines.push(status);

    lines.push(format!("Result: {}", view.result));
    if !view.error.is_empty() {
        lines.push(format!("Error: {}", view.error));
    }

    lines
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) * BAR_WIDTH / 100) as usize;
    let mut bar = "#".repeat(filled);
    bar.push_str(&"-".repeat(BAR_WIDTH as usize - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use predictor_core::INITIAL_RESULT;

    fn base_view() -> PredictViewModel {
        PredictViewModel::default()
    }

    #[test]
    fn idle_view_shows_initial_result() {
        let lines = render(&base_view());
        assert_eq!(lines[0], "Status: idle");
        assert_eq!(lines[1], format!("Result: {INITIAL_RESULT}"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn determinate_progress_renders_bar_and_percent() {
        let view = PredictViewModel {
            in_progress: true,
            spinner_mode: SpinnerMode::Determinate,
            spinner_value: 50,
            ..base_view()
        };
        let lines = render(&view);
        assert_eq!(lines[0], "Status: [##########----------] 50%");
    }

    #[test]
    fn indeterminate_progress_renders_working() {
        let view = PredictViewModel {
            in_progress: true,
            spinner_mode: SpinnerMode::Indeterminate,
            ..base_view()
        };
        assert_eq!(render(&view)[0], "Status: working...");
    }

    #[test]
    fn toast_and_error_lines_appear_when_set() {
        let view = PredictViewModel {
            toast: Some(predictor_core::ToastView {
                message: "Predicting correct words...".to_string(),
                action: "Requested!".to_string(),
            }),
            error: "503 - Service Unavailable".to_string(),
            ..base_view()
        };
        let lines = render(&view);
        assert_eq!(lines[0], "* Predicting correct words... [Requested!]");
        assert_eq!(lines.last().unwrap(), "Error: 503 - Service Unavailable");
    }
}
