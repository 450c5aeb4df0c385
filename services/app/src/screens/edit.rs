//! Edit-entry screen: full replace of an entry, or its deletion

use entries::{EntriesClient, Entry, EntryForm, validation::validate_entry};

use super::BusyFlag;
use crate::{
    navigation::{Route, Transition},
    state::AppState,
    toast::Toast,
};

pub struct EditScreen {
    id: String,
    form: EntryForm,
    client: EntriesClient,
    toast: Toast,
    busy: BusyFlag,
}

impl EditScreen {
    /// Open the screen prefilled from `entry`
    pub fn new(state: &AppState, entry: &Entry) -> Self {
        Self::with_form(state, entry.id.clone(), EntryForm::from_entry(entry))
    }

    /// Open the screen for `id` with an explicit starting form
    pub fn with_form(state: &AppState, id: impl Into<String>, form: EntryForm) -> Self {
        Self {
            id: id.into(),
            form,
            client: state.entries.clone(),
            toast: state.toast(),
            busy: BusyFlag::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Values the form was opened with
    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Save the edited fields and return to the list
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

        match self.client.update(&self.id, &payload).await {
            Ok(()) => {
                self.toast.show("Entry updated successfully");
                Transition::Replace(Route::Home)
            }
            Err(e) if e.is_connection_failure() => {
                self.toast.show("Connection problem");
                Transition::Stay
            }
            Err(_) => {
                self.toast.show("Update failed");
                Transition::Stay
            }
        }
    }

    /// Delete the entry once the user has confirmed
    pub async fn delete(&self, confirmed: bool) -> Transition {
        if !confirmed {
            return Transition::Stay;
        }

        let Some(_busy) = self.busy.try_acquire() else {
            return Transition::Stay;
        };

        match self.client.delete(&self.id).await {
            Ok(()) => {
                self.toast.show("Entry removed");
                Transition::Replace(Route::Home)
            }
            Err(e) if e.is_connection_failure() => {
                self.toast.show("Connection problem");
                Transition::Stay
            }
            Err(_) => {
                self.toast.show("Delete failed");
                Transition::Stay
            }
        }
    }
}
