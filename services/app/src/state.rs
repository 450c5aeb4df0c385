//! Application state shared across screens

use auth::{AuthClient, SessionManager};
use common::{Backend, FileStore, KeyValueStore, Settings};
use entries::EntriesClient;
use std::sync::Arc;
use std::time::Duration;

use crate::toast::Toast;

/// Clients and settings every screen is built from
///
/// Screens share the clients, and through them the session store, but each
/// screen owns its own toast.
#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthClient,
    pub entries: EntriesClient,
    pub toast_dismiss_after: Duration,
    pub redirect_prefix: String,
}

impl AppState {
    /// Build the state over an explicit key-value store
    pub fn new(settings: &Settings, store: Arc<dyn KeyValueStore>) -> Self {
        let backend = Backend::new(&settings.api.base_url);
        let session = SessionManager::new(store);

        Self {
            auth: AuthClient::new(backend.clone(), session.clone()),
            entries: EntriesClient::new(backend, session),
            toast_dismiss_after: Duration::from_millis(settings.toast.dismiss_after_ms),
            redirect_prefix: settings.oauth.redirect_prefix.clone(),
        }
    }

    /// Build the state with the on-disk session store from the settings
    pub fn from_settings(settings: &Settings) -> Self {
        let store = Arc::new(FileStore::new(&settings.session.store_path));
        Self::new(settings, store)
    }

    /// A fresh toast for a new screen
    pub fn toast(&self) -> Toast {
        Toast::new(self.toast_dismiss_after)
    }

    pub fn session(&self) -> &SessionManager {
        self.auth.session()
    }
}
