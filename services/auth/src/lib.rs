//! Authentication client for the MediaLogger backend
//!
//! Covers password login, registration, logout and the deep-link half of
//! social login, plus the pre-flight validation of the matching forms.

pub mod client;
pub mod models;
pub mod oauth;
pub mod session;
pub mod validation;

pub use client::AuthClient;
pub use models::{LoginRequest, RegisterRequest, Registration};
pub use oauth::OAuthProvider;
pub use session::SessionManager;
