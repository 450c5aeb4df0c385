//! Media entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of media an entry logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Book,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Book => "book",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Media type must be movie or book")]
pub struct UnknownMediaType;

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "book" => Ok(MediaType::Book),
            _ => Err(UnknownMediaType),
        }
    }
}

/// Media entry as returned by `GET /api/entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Backend-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub media_type: MediaType,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of create and update requests. Update replaces all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    pub title: String,
    pub media_type: MediaType,
    pub rating: u8,
}

/// Raw add/edit form input, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub media_type: String,
    pub rating: String,
}

impl EntryForm {
    pub fn new(
        title: impl Into<String>,
        media_type: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            media_type: media_type.into(),
            rating: rating.into(),
        }
    }

    /// Form prefilled with an existing entry, for editing
    pub fn from_entry(entry: &Entry) -> Self {
        Self::new(
            entry.title.clone(),
            entry.media_type.as_str(),
            entry.rating.to_string(),
        )
    }
}

impl Default for EntryForm {
    // The add form starts with "movie" selected
    fn default() -> Self {
        Self::new("", MediaType::Movie.as_str(), "")
    }
}
