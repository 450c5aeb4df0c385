//! Input validation for the add and edit entry forms

use common::ValidationError;

use crate::models::{EntryForm, EntryPayload, MediaType};

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Validate a form and turn it into a request payload. The title is sent
/// trimmed.
pub fn validate_entry(form: &EntryForm) -> Result<EntryPayload, ValidationError> {
    if form.title.is_empty() {
        return Err(ValidationError::new("title", "Please enter all fields"));
    }

    if form.rating.is_empty() {
        return Err(ValidationError::new("rating", "Please enter all fields"));
    }

    let title = validate_title(&form.title)?;
    let media_type = validate_media_type(&form.media_type)?;
    let rating = parse_rating(&form.rating)?;

    Ok(EntryPayload {
        title,
        media_type,
        rating,
    })
}

/// Validate title
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("title", "Title cannot be blank"));
    }

    Ok(trimmed.to_string())
}

/// Validate media type
pub fn validate_media_type(media_type: &str) -> Result<MediaType, ValidationError> {
    media_type
        .parse()
        .map_err(|e| ValidationError::new("mediaType", format!("{e}")))
}

/// Parse a rating typed as text. Surrounding whitespace is ignored; the rest
/// must be a base-10 integer within [`MIN_RATING`, `MAX_RATING`].
pub fn parse_rating(rating: &str) -> Result<u8, ValidationError> {
    let invalid = || {
        ValidationError::new(
            "rating",
            format!("Rating must be a whole number between {MIN_RATING} and {MAX_RATING}"),
        )
    };

    let value: i64 = rating.trim().parse().map_err(|_| invalid())?;

    u8::try_from(value)
        .ok()
        .filter(|value| (MIN_RATING..=MAX_RATING).contains(value))
        .ok_or_else(invalid)
}
