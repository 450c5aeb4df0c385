//! Add-entry screen

use entries::{EntriesClient, EntryForm, validation::validate_entry};

use super::BusyFlag;
use crate::{navigation::Transition, state::AppState, toast::Toast};

pub struct AddScreen {
    client: EntriesClient,
    toast: Toast,
    busy: BusyFlag,
}

impl AddScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            client: state.entries.clone(),
            toast: state.toast(),
            busy: BusyFlag::default(),
        }
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Create the entry and go back to the list
    pub async fn submit(&self, form: &EntryForm) -> Transition {
        let Some(_busy) = self.busy.try_acquire() else {
            return Transition::Stay;
        };

        let payload = match validate_entry(form) {
            Ok(payload) => payload,
            Err(e) => {
                self.toast.show(e.message);
                return Transition::Stay;
            }
        };

        match self.client.create(&payload).await {
            Ok(()) => {
                self.toast.show("Entry added successfully");
                Transition::Back
            }
            Err(e) if e.is_connection_failure() => {
                self.toast.show("Failed to connect to server");
                Transition::Stay
            }
            Err(e) => {
                self.toast.show(e.message_or("Failed to add entry"));
                Transition::Stay
            }
        }
    }
}
