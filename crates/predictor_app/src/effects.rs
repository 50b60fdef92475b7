use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn};
use predictor_core::{Effect, Msg};
use predictor_engine::{ClientSettings, EngineEvent, EngineHandle, PredictionRequest};

/// Executes core effects against the engine and feeds engine events back
/// into the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, event_rx) = EngineHandle::new(settings);
        spawn_event_loop(event_rx, msg_tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostPrediction { url, value } => {
                    client_info!("PostPrediction value_len={}", value.len());
                    self.engine.submit(PredictionRequest { url, value });
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::Completed { result } => match result {
                    Ok(item) => Msg::ItemReceived {
                        value: item.value,
                        progress: item.progress,
                    },
                    Err(err) => {
                        let message = err.display_message();
                        client_warn!("request failed: {}", message);
                        Msg::RequestFailed(message)
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
