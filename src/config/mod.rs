//! Shell configuration.
//!
//! - `app`: compiled-in product constants and `ShellConfig`
//! - `preferences`: the persisted `openAtLogin` record

pub mod app;
pub mod preferences;

pub use app::ShellConfig;
pub use preferences::{PreferenceStore, Preferences};
