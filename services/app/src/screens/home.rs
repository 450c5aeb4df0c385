//! Home screen: the entry list, deletion and logout

use auth::AuthClient;
use entries::{EntriesClient, Entry};
use std::sync::Mutex;
use tracing::{debug, error};

use super::BusyFlag;
use crate::{
    navigation::{Route, Transition},
    state::AppState,
    toast::Toast,
};

pub struct HomeScreen {
    auth: AuthClient,
    client: EntriesClient,
    toast: Toast,
    busy: BusyFlag,
    entries: Mutex<Vec<Entry>>,
}

impl HomeScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            auth: state.auth.clone(),
            client: state.entries.clone(),
            toast: state.toast(),
            busy: BusyFlag::default(),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Entries from the last load
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Fetch the list from the backend.
    ///
    /// A rejected request (bad or missing token) shows an empty list. Only a
    /// failure to reach the backend raises a toast.
    pub async fn load(&self) -> Vec<Entry> {
        let entries = match self.client.list().await {
            Ok(entries) => entries,
            Err(e) if e.is_connection_failure() => {
                error!("Failed to load entries: {}", e);
                self.toast.show("Failed to load data");
                Vec::new()
            }
            Err(e) => {
                debug!("Showing empty list after failed load: {}", e);
                Vec::new()
            }
        };

        *self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = entries.clone();
        entries
    }

    /// Delete an entry once the user has confirmed, then reload the list.
    /// Returns whether the backend accepted the deletion.
    ///
    /// When the backend cannot be reached the list is left as it was.
    pub async fn delete(&self, id: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        let Some(_busy) = self.busy.try_acquire() else {
            return false;
        };

        let deleted = match self.client.delete(id).await {
            Ok(()) => true,
            Err(e) if e.is_connection_failure() => {
                error!("Failed to delete entry {}: {}", id, e);
                self.toast.show("Delete failed");
                return false;
            }
            Err(e) => {
                self.toast.show(e.message_or("Delete failed"));
                false
            }
        };

        self.load().await;
        deleted
    }

    pub async fn logout(&self) -> Transition {
        match self.auth.logout().await {
            Ok(()) => Transition::Replace(Route::Login),
            Err(e) => {
                error!("Failed to clear session: {}", e);
                self.toast.show("Logout failed");
                Transition::Stay
            }
        }
    }

    pub fn open(&self, entry: &Entry) -> Transition {
        Transition::Push(Route::Edit {
            id: entry.id.clone(),
        })
    }

    pub fn open_add(&self) -> Transition {
        Transition::Push(Route::Add)
    }
}
