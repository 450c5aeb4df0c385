//! HTTP client for the entry CRUD endpoints

use auth::SessionManager;
use common::{Backend, RequestError, RequestResult, http::rejection};
use reqwest::{RequestBuilder, Response, Url};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::models::{Entry, EntryPayload};

const ENTRIES_PATH: &str = "/api/entries";

/// Entries client. Every call reads the bearer token from the session at
/// request time.
#[derive(Clone, Debug)]
pub struct EntriesClient {
    backend: Backend,
    session: SessionManager,
}

impl EntriesClient {
    /// Create a new entries client
    pub fn new(backend: Backend, session: SessionManager) -> Self {
        Self { backend, session }
    }

    /// Fetch every entry owned by the session's user.
    ///
    /// Array elements that do not decode as an entry are skipped with a
    /// warning rather than failing the whole list.
    pub async fn list(&self) -> RequestResult<Vec<Entry>> {
        info!("Listing entries");

        let request = self.backend.client().get(self.backend.url(ENTRIES_PATH));
        let response = self.send(request).await?;

        let body: Value = response.json().await.map_err(|e| {
            error!("Failed to decode entry list: {}", e);
            RequestError::from_reqwest(e)
        })?;

        let Value::Array(items) = body else {
            warn!("Entry list was not a JSON array");
            return Err(RequestError::UnexpectedBody(
                "expected an array of entries".to_string(),
            ));
        };

        let total = items.len();
        let entries: Vec<Entry> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping malformed entry: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} of {} entries", entries.len(), total);
        Ok(entries)
    }

    /// Create an entry
    pub async fn create(&self, payload: &EntryPayload) -> RequestResult<()> {
        info!("Creating {} entry '{}'", payload.media_type, payload.title);

        let request = self
            .backend
            .client()
            .post(self.backend.url(ENTRIES_PATH))
            .json(payload);
        self.send(request).await?;
        Ok(())
    }

    /// Replace title, media type and rating of an entry
    pub async fn update(&self, id: &str, payload: &EntryPayload) -> RequestResult<()> {
        info!("Updating entry {}", id);

        let request = self.backend.client().put(self.entry_url(id)?).json(payload);
        self.send(request).await?;
        Ok(())
    }

    /// Delete an entry
    pub async fn delete(&self, id: &str) -> RequestResult<()> {
        info!("Deleting entry {}", id);

        let request = self.backend.client().delete(self.entry_url(id)?);
        self.send(request).await?;
        Ok(())
    }

    /// URL of a single entry, with `id` percent-encoded as one path segment.
    /// Empty and dot-segment ids are refused since no URL can address them.
    fn entry_url(&self, id: &str) -> RequestResult<Url> {
        if matches!(id, "" | "." | "..") {
            warn!("Refusing to address entry with id {:?}", id);
            return Err(RequestError::InvalidUrl(format!("invalid entry id {id:?}")));
        }

        let base = self.backend.url(ENTRIES_PATH);
        let mut url =
            Url::parse(&base).map_err(|e| RequestError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| RequestError::InvalidUrl(base.clone()))?
            .push(id);
        Ok(url)
    }

    /// Attach the bearer token, send, and map non-2xx statuses to a rejection
    async fn send(&self, request: RequestBuilder) -> RequestResult<Response> {
        let request = match self.session.token().await? {
            Some(token) => request.bearer_auth(token),
            None => {
                warn!("No session token stored; sending unauthenticated request");
                request
            }
        };

        let response = request.send().await.map_err(|e| {
            error!("Request to backend failed: {}", e);
            RequestError::Transport(e)
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(rejection(response).await)
        }
    }
}
