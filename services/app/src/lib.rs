//! MediaLogger client application
//!
//! Screen controllers, the toast surface and navigation model, plus the
//! command-line front end that drives them.

pub mod cli;
pub mod commands;
pub mod navigation;
pub mod screens;
pub mod state;
pub mod telemetry;
pub mod toast;

pub use navigation::{Navigator, Route, Transition};
pub use state::AppState;
pub use toast::Toast;
