//! Login screen: email/password sign-in and the social login deep link

use auth::{AuthClient, LoginRequest, OAuthProvider, validation::validate_login};
use tracing::{error, info};

use super::BusyFlag;
use crate::{
    navigation::{Route, Transition},
    state::AppState,
    toast::Toast,
};

pub struct LoginScreen {
    auth: AuthClient,
    toast: Toast,
    busy: BusyFlag,
    redirect_prefix: String,
}

impl LoginScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            auth: state.auth.clone(),
            toast: state.toast(),
            busy: BusyFlag::default(),
            redirect_prefix: state.redirect_prefix.clone(),
        }
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Sign in with email and password
    pub async fn submit(&self, form: &LoginRequest) -> Transition {
        let Some(_busy) = self.busy.try_acquire() else {
            return Transition::Stay;
        };

        if let Err(e) = validate_login(form) {
            self.toast.show(e.message);
            return Transition::Stay;
        }

        match self.auth.login(form).await {
            Ok(()) => Transition::Replace(Route::Home),
            Err(e) if e.is_connection_failure() => {
                self.toast.show("Server connection failed");
                Transition::Stay
            }
            Err(e) => {
                self.toast.show(e.message_or("Login failed"));
                Transition::Stay
            }
        }
    }

    /// Page that starts a social login on the backend
    pub fn social_login_url(&self, provider: OAuthProvider) -> String {
        self.auth.social_login_url(provider)
    }

    /// Handle a deep link. Links that do not complete a social login are
    /// ignored.
    pub async fn handle_redirect(&self, url: &str) -> Transition {
        match self
            .auth
            .complete_social_login(url, &self.redirect_prefix)
            .await
        {
            Ok(true) => Transition::Replace(Route::Home),
            Ok(false) => {
                info!("Ignoring deep link without session token");
                Transition::Stay
            }
            Err(e) => {
                error!("Failed to store social login token: {}", e);
                self.toast.show("Login failed");
                Transition::Stay
            }
        }
    }

    pub fn open_register(&self) -> Transition {
        Transition::Push(Route::Register)
    }
}
