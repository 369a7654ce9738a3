// HTTP transport - GET, status validation and JSON decoding
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::error::Category;
use std::collections::HashMap;

/// Maximum number of body characters echoed to the debug log.
const BODY_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid response from server")]
    InvalidResponse,
    #[error("Failed to decode server response")]
    DecodingError,
    #[error("Server returned HTTP status {0}")]
    HttpError(u16),
    #[error("Request failed: {0}")]
    Unknown(String),
}

#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Issue a GET and return the response body parsed as JSON.
    ///
    /// Only 2xx responses are parsed; anything else is `HttpError`.
    async fn request_json(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Value, NetworkError>;
}

/// Issue a GET through `service` and decode the payload as `T`.
pub async fn request<T: DeserializeOwned>(
    service: &dyn NetworkService,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<T, NetworkError> {
    let payload = service.request_json(url, headers).await?;

    serde_json::from_value(payload).map_err(|e| {
        log_decode_failure(&e);
        NetworkError::DecodingError
    })
}

/// `reqwest`-backed transport. No retries and no timeout beyond the client default.
#[derive(Debug, Clone, Default)]
pub struct DefaultNetworkService {
    client: reqwest::Client,
}

impl DefaultNetworkService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NetworkService for DefaultNetworkService {
    async fn request_json(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Value, NetworkError> {
        let url = Url::parse(url).map_err(|_| NetworkError::InvalidUrl)?;

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::Unknown(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            NetworkError::InvalidResponse
        })?;

        let preview: String = String::from_utf8_lossy(&body)
            .chars()
            .take(BODY_PREVIEW_CHARS)
            .collect();
        tracing::debug!("Response {}", preview);

        serde_json::from_slice(&body).map_err(|e| {
            log_decode_failure(&e);
            NetworkError::DecodingError
        })
    }
}

fn log_decode_failure(error: &serde_json::Error) {
    let kind = match error.classify() {
        Category::Io => "I/O failure",
        Category::Syntax => "malformed JSON",
        Category::Data => "schema mismatch",
        Category::Eof => "unexpected end of input",
    };
    tracing::warn!(
        "Decode error ({}) at line {} column {}: {}",
        kind,
        error.line(),
        error.column(),
        error
    );
}
