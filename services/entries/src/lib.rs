//! Entries client for the MediaLogger backend
//!
//! Models, form validation and the HTTP client for the `/api/entries`
//! resource.

pub mod client;
pub mod models;
pub mod validation;

pub use client::EntriesClient;
pub use models::{Entry, EntryForm, EntryPayload, MediaType};
