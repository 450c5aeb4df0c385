//! Social login through backend-hosted OAuth flows
//!
//! The client never talks to the identity provider. It opens the backend's
//! `/api/auth/{provider}` page, and the backend finishes by redirecting to the
//! app's deep link with the session token in the query.

use common::Backend;
use reqwest::Url;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// OAuth2 provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
    Facebook,
}

impl OAuthProvider {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
            OAuthProvider::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider name that is not one of the supported providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown provider '{0}'; expected google, github or facebook")]
pub struct UnknownProvider(pub String);

impl FromStr for OAuthProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "github" => Ok(OAuthProvider::Github),
            "facebook" => Ok(OAuthProvider::Facebook),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Page that starts the provider's flow on the backend
pub fn authorization_url(backend: &Backend, provider: OAuthProvider) -> String {
    backend.url(&format!("/api/auth/{}", provider.as_str()))
}

/// Extract the session token from the final redirect of a social login.
///
/// Returns `None` unless `redirect` starts with `prefix` and carries a
/// non-empty `token` parameter in its query or fragment.
pub fn token_from_redirect(redirect: &str, prefix: &str) -> Option<String> {
    if !redirect.starts_with(prefix) {
        return None;
    }

    let url = Url::parse(redirect).ok()?;

    let from_query = url
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned());

    let from_fragment = || {
        url.fragment()?
            .split('&')
            .find_map(|pair| pair.strip_prefix("token="))
            .map(str::to_string)
    };

    from_query
        .or_else(from_fragment)
        .filter(|token| !token.is_empty())
}
