//! Predictor engine: HTTP submission and effect execution.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, ReqwestPoster, RequestPoster, ENDPOINT_PATH};
pub use engine::EngineHandle;
pub use types::{EngineEvent, PostError, PredictionItem, PredictionRequest};
