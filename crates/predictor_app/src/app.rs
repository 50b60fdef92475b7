//! Terminal shell: wires the pure core to the engine through a message loop.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use client_logging::client_info;
use predictor_core::{update, AppState, Msg, PredictViewModel};
use predictor_engine::ClientSettings;

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::render;

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const DEFAULT_BASE_URL: &str = "http://localhost:42200";

enum AppEvent {
    Msg(Msg),
    Quit,
}

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let settings = ClientSettings::for_base_url(&base_url);
    client_info!("predictor_app starting, endpoint {}", settings.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_tick_thread(event_tx.clone());
    spawn_stdin_thread(event_tx.clone());
    spawn_forwarder(msg_rx, event_tx);

    println!("Type a phrase and press Enter to request a prediction (Ctrl-D to quit).");
    let mut state = AppState::new();
    print_view(&state.view());

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Msg(msg) => msg,
            AppEvent::Quit => break,
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
        if state.consume_dirty() {
            print_view(&state.view());
        }
    }

    client_info!("predictor_app shutting down");
    Ok(())
}

/// Periodic tick to expire the toast and coalesce rendering.
fn spawn_tick_thread(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while event_tx.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

/// Each entered line is an input edit followed by a submit.
fn spawn_stdin_thread(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Msg(Msg::InputChanged(line))).is_err() {
                return;
            }
            if event_tx.send(AppEvent::Msg(Msg::SubmitClicked)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    });
}

/// Forwards engine-originated messages into the single app event stream.
fn spawn_forwarder(msg_rx: mpsc::Receiver<Msg>, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(msg) = msg_rx.recv() {
            if event_tx.send(AppEvent::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

fn print_view(view: &PredictViewModel) {
    for line in render::render(view) {
        println!("{line}");
    }
}
