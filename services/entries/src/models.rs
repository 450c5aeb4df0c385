//! Entry models exchanged with the backend

pub mod entry;

pub use entry::{Entry, EntryForm, EntryPayload, MediaType, UnknownMediaType};
