//! Token-bearing responses from the auth endpoints

use serde::{Deserialize, Serialize};

/// Body returned by `/api/auth/login` and `/api/auth/register`
///
/// Success is signalled by `ok`, not by the HTTP status alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponse {
    /// The token, if the backend issued a non-empty one
    pub fn issued_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Outcome of a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The backend issued a token and the session is now active
    SignedIn,
    /// The account exists but the user still has to log in
    AccountCreated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_failure() {
        let response: AuthResponse = serde_json::from_str(r#"{"error":"Email taken"}"#).unwrap();
        assert!(!response.ok);
        assert_eq!(response.issued_token(), None);
        assert_eq!(response.error.as_deref(), Some("Email taken"));
    }

    #[test]
    fn empty_token_is_not_issued() {
        let response: AuthResponse = serde_json::from_str(r#"{"ok":true,"token":""}"#).unwrap();
        assert!(response.ok);
        assert_eq!(response.issued_token(), None);
    }
}
