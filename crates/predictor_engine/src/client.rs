use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::{PostError, PredictionItem, PredictionRequest};

/// Endpoint path the prediction backend serves.
pub const ENDPOINT_PATH: &str = "cats-vs-dogs-request";

/// Where and how the client talks to the prediction backend.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Absolute URL of the prediction endpoint.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    /// Settings pointing at the default endpoint path under `base_url`.
    pub fn for_base_url(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), ENDPOINT_PATH),
            ..Self::default()
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: format!("http://localhost:42200/{ENDPOINT_PATH}"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait RequestPoster: Send + Sync {
    async fn post(&self, request: &PredictionRequest) -> Result<PredictionItem, PostError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    settings: ClientSettings,
}

impl ReqwestPoster {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, PostError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| PostError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl RequestPoster for ReqwestPoster {
    async fn post(&self, request: &PredictionRequest) -> Result<PredictionItem, PostError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| PostError::InvalidUrl(err.to_string()))?;
        let body = serde_json::to_string(request)
            .map_err(|err| PostError::InvalidBody(err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostError::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Server error").to_string(),
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        if text.trim().is_empty() {
            // The backend may answer with no body at all; treat it as the
            // empty item rather than a decode failure.
            return Ok(PredictionItem::default());
        }
        serde_json::from_str(&text).map_err(|err| PostError::InvalidBody(err.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> PostError {
    if err.is_timeout() {
        return PostError::Timeout(err.to_string());
    }
    PostError::Network(err.to_string())
}
