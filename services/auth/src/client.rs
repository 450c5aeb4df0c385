//! HTTP client for the backend's authentication endpoints

use common::{Backend, RequestError, RequestResult, http::rejected};
use reqwest::Response;
use tracing::{error, info, warn};

use crate::{
    models::{AuthResponse, LoginRequest, RegisterRequest, Registration},
    oauth::{self, OAuthProvider},
    session::SessionManager,
};

/// Authentication client: talks to `/api/auth/*` and keeps the session
/// store in step with the outcome
#[derive(Clone, Debug)]
pub struct AuthClient {
    backend: Backend,
    session: SessionManager,
}

impl AuthClient {
    /// Create a new auth client
    pub fn new(backend: Backend, session: SessionManager) -> Self {
        Self { backend, session }
    }

    /// The session this client writes to
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Log in with email and password. On success the issued token is
    /// persisted before returning.
    pub async fn login(&self, credentials: &LoginRequest) -> RequestResult<()> {
        info!("Login attempt for user: {}", credentials.email);

        let response = self.post("/api/auth/login", credentials).await?;
        let status = response.status();
        let body = Self::read_body(response).await?;

        match body.issued_token() {
            Some(token) if body.ok => {
                self.session.save_token(token).await?;
                info!("Login succeeded for user: {}", credentials.email);
                Ok(())
            }
            _ => {
                warn!("Login rejected for user: {} ({})", credentials.email, status);
                Err(rejected(status, body.error))
            }
        }
    }

    /// Create an account. When the backend also issues a token the user is
    /// signed in straight away.
    pub async fn register(&self, request: &RegisterRequest) -> RequestResult<Registration> {
        info!("Registration attempt for user: {}", request.username);

        let response = self.post("/api/auth/register", request).await?;
        let status = response.status();
        let body = Self::read_body(response).await?;

        if !body.ok {
            warn!("Registration rejected for user: {} ({})", request.username, status);
            return Err(rejected(status, body.error));
        }

        match body.issued_token() {
            Some(token) => {
                self.session.save_token(token).await?;
                Ok(Registration::SignedIn)
            }
            None => Ok(Registration::AccountCreated),
        }
    }

    /// Drop the local session. The backend keeps no session state to revoke.
    pub async fn logout(&self) -> RequestResult<()> {
        self.session.clear().await?;
        Ok(())
    }

    /// Page to open for a social login
    pub fn social_login_url(&self, provider: OAuthProvider) -> String {
        oauth::authorization_url(&self.backend, provider)
    }

    /// Finish a social login from its final redirect URL.
    ///
    /// Returns `false` without touching the session when the URL does not
    /// carry a token under `prefix`.
    pub async fn complete_social_login(&self, redirect: &str, prefix: &str) -> RequestResult<bool> {
        match oauth::token_from_redirect(redirect, prefix) {
            Some(token) => {
                self.session.save_token(&token).await?;
                info!("Social login completed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> RequestResult<Response> {
        self.backend
            .client()
            .post(self.backend.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach {}: {}", path, e);
                RequestError::Transport(e)
            })
    }

    // The auth endpoints answer with a JSON body on success and failure alike
    async fn read_body(response: Response) -> RequestResult<AuthResponse> {
        response.json::<AuthResponse>().await.map_err(|e| {
            error!("Failed to decode auth response: {}", e);
            RequestError::from_reqwest(e)
        })
    }
}
