//! Common library for the MediaLogger client
//!
//! This crate provides functionality shared by the auth and entries clients
//! and the command-line front end: error types, the key-value storage
//! abstraction that holds the session token, layered settings, and the
//! backend HTTP handle.
//!
//! ```rust,no_run
//! use common::{FileStore, KeyValueStore, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load()?;
//!     let store = FileStore::new(&settings.session.store_path);
//!     store.set("token", "opaque").await?;
//!     println!("Stored token: {:?}", store.get("token").await?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod settings;
pub mod storage;

pub use error::{RequestError, RequestResult, StorageError, StorageResult, ValidationError};
pub use http::Backend;
pub use settings::Settings;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
