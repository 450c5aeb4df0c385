//! Shared HTTP plumbing for talking to the MediaLogger backend

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::error::RequestError;

/// Failure body the backend sends alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Handle to the remote backend: a reusable HTTP client plus the base URL
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    /// Create a backend handle. Trailing slashes on `base_url` are ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a backend handle around an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/entries`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The underlying HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Turn a non-2xx response into a [`RequestError::Rejected`], keeping the
/// `error` field of the body when the backend sent one.
pub async fn rejection(response: Response) -> RequestError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);

    warn!(
        "Backend rejected request with {}: {}",
        status,
        message.as_deref().unwrap_or("<no message>")
    );

    rejected(status, message)
}

/// Build a rejection from a status and optional server message
pub fn rejected(status: StatusCode, message: Option<String>) -> RequestError {
    RequestError::Rejected {
        status: status.as_u16(),
        message,
    }
}
