use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_error;

use crate::client::{ClientSettings, ReqwestPoster, RequestPoster};
use crate::{EngineEvent, PredictionRequest};

enum EngineCommand {
    Submit { request: PredictionRequest },
}

/// Handle to the background runtime thread that executes POSTs.
///
/// Submissions are fire-and-forget; completions arrive on the event
/// receiver returned by [`EngineHandle::new`]. Overlapping submissions are
/// not serialized, so events arrive in whatever order the backend answers.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let poster = Arc::new(ReqwestPoster::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let poster = poster.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(poster.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, request: PredictionRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { request });
    }
}

async fn handle_command(
    poster: &dyn RequestPoster,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request } => {
            let result = poster.post(&request).await;
            if let Err(err) = &result {
                client_error!("post failed: {}", err.display_message());
            }
            let _ = event_tx.send(EngineEvent::Completed { result });
        }
    }
}
