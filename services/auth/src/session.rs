//! Session management on top of the device key-value store

use common::{KeyValueStore, StorageResult};
use std::sync::Arc;
use tracing::info;

/// Key under which the bearer token is persisted
pub const TOKEN_KEY: &str = "token";

/// Session manager for the persisted bearer token
///
/// The token is read from the store on every call and never cached, so
/// several managers over one store always agree.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the token issued at login or registration
    pub async fn save_token(&self, token: &str) -> StorageResult<()> {
        info!("Persisting session token");
        self.store.set(TOKEN_KEY, token).await
    }

    /// Current token, if any
    pub async fn token(&self) -> StorageResult<Option<String>> {
        Ok(self
            .store
            .get(TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty()))
    }

    /// Forget the token (logout)
    pub async fn clear(&self) -> StorageResult<()> {
        info!("Clearing session token");
        self.store.remove(TOKEN_KEY).await
    }

    /// Check if a token is stored
    pub async fn is_signed_in(&self) -> StorageResult<bool> {
        Ok(self.token().await?.is_some())
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}
