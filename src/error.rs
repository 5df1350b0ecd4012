//! Central error types for Vercel Desktop.
//!
//! Nothing in the shell is fatal: these errors are logged at the handler
//! boundary and the event loop carries on. `Serialize` is implemented so the
//! one IPC command can return them.

use serde::Serialize;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Preference file could not be read or written
    #[error("Preference storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error bubbled up from the Tauri runtime
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Main window could not be created or driven
    #[error("Window error: {0}")]
    Window(String),

    /// Tray icon or its menu failed
    #[error("Tray error: {0}")]
    Tray(String),

    /// Icon asset could not be decoded
    #[error("Icon error: {0}")]
    Icon(String),

    /// Login-item registration failed
    #[error("Autostart error: {0}")]
    Autostart(String),

    /// Global shortcut registration failed
    #[error("Shortcut error: {0}")]
    Shortcut(String),

    /// Handing a URL to the external browser failed
    #[error("Failed to open external URL: {0}")]
    Opener(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Tauri requires command errors to be serializable to reach the webview.
impl Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<image::ImageError> for ShellError {
    fn from(err: image::ImageError) -> Self {
        ShellError::Icon(err.to_string())
    }
}

/// Extension trait for adding context to Results.
///
/// # Example
/// ```ignore
/// use crate::error::{ResultExt, ShellResult};
///
/// fn read_record(path: &Path) -> ShellResult<String> {
///     std::fs::read_to_string(path).context("failed to read preferences")
/// }
/// ```
pub trait ResultExt<T> {
    /// Add context to an error, converting it to ShellError::Other.
    fn context(self, msg: &str) -> ShellResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> ShellResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> ShellResult<T> {
        self.map_err(|e| ShellError::Other(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> ShellResult<T> {
        self.map_err(|e| ShellError::Other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to ShellError::Other with the given message.
    fn context(self, msg: &str) -> ShellResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> ShellResult<T> {
        self.ok_or_else(|| ShellError::Other(msg.to_string()))
    }
}

/// Type alias for Results using ShellError.
pub type ShellResult<T> = Result<T, ShellError>;
