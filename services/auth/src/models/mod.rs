//! Authentication request and response payloads

pub mod token;
pub mod user;

// Re-export for convenience
pub use token::{AuthResponse, Registration};
pub use user::{LoginRequest, RegisterRequest};
