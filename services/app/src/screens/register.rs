//! Registration screen

use auth::{AuthClient, RegisterRequest, Registration, validation::validate_registration};

use super::BusyFlag;
use crate::{
    navigation::{Route, Transition},
    state::AppState,
    toast::Toast,
};

pub struct RegisterScreen {
    auth: AuthClient,
    toast: Toast,
    busy: BusyFlag,
}

impl RegisterScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            auth: state.auth.clone(),
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

    /// Create the account. Lands on Home when the backend signs the user in
    /// right away, otherwise back on Login.
    pub async fn submit(&self, form: &RegisterRequest) -> Transition {
        let Some(_busy) = self.busy.try_acquire() else {
            return Transition::Stay;
        };

        if let Err(e) = validate_registration(form) {
            self.toast.show(e.message);
            return Transition::Stay;
        }

        match self.auth.register(form).await {
            Ok(outcome) => {
                self.toast.show("Account created successfully");
                match outcome {
                    Registration::SignedIn => Transition::Replace(Route::Home),
                    Registration::AccountCreated => Transition::Replace(Route::Login),
                }
            }
            Err(e) if e.is_connection_failure() => {
                self.toast.show("Server connection failed");
                Transition::Stay
            }
            Err(e) => {
                self.toast.show(e.message_or("Registration failed"));
                Transition::Stay
            }
        }
    }

    pub fn open_login(&self) -> Transition {
        Transition::Replace(Route::Login)
    }
}
