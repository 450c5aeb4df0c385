//! Input validation for the login and registration forms
//!
//! These checks run before any request is sent. They only reject what the
//! backend is guaranteed to refuse; format rules stay on the server.

use common::ValidationError;

use crate::models::{LoginRequest, RegisterRequest};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate login credentials
pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.email.is_empty() {
        return Err(ValidationError::new("email", "Please enter all fields"));
    }

    if request.password.is_empty() {
        return Err(ValidationError::new("password", "Please enter all fields"));
    }

    Ok(())
}

/// Validate a registration form
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    let missing = [
        ("username", &request.username),
        ("email", &request.email),
        ("password", &request.password),
    ]
    .into_iter()
    .find(|(_, value)| value.is_empty());

    if let Some((field, _)) = missing {
        return Err(ValidationError::new(field, "Please fill all fields"));
    }

    validate_password(&request.password)
}

/// Validate password length, counted in characters rather than bytes
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    Ok(())
}
