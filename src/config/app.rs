//! Fixed product configuration.
//!
//! The shell points at one hosted dashboard and never leaves its origin, so
//! everything here is compiled in. `ShellConfig` is built once at startup and
//! owned by [`crate::app::ShellState`].

use tauri::Url;

use crate::error::{ResultExt, ShellResult};

/// Title pinned on the window and used as the tray tooltip.
pub const APP_TITLE: &str = "Vercel Desktop";

/// Page loaded into the main window at startup.
pub const DASHBOARD_URL: &str = "https://vercel.com/dashboard";

/// Origin the navigation guard keeps the window confined to.
pub const ALLOWED_ORIGIN: &str = "https://vercel.com";

/// Label of the single webview window.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Id of the single tray icon.
pub const TRAY_ID: &str = "main-tray";

/// Preference file name inside the app data directory.
pub const PREFERENCES_FILE: &str = "config.json";

/// Directory (relative to the resource dir) holding `icon.*`.
pub const ASSETS_DIR: &str = "assets";

/// Icon file stem, tried with each of [`ICON_EXTENSIONS`].
pub const ICON_BASENAME: &str = "icon";

/// Icon formats in priority order; the first one is the fallback path.
pub const ICON_EXTENSIONS: [&str; 3] = ["png", "ico", "svg"];

/// Edge length of the tray icon in pixels.
pub const TRAY_ICON_SIZE: u32 = 16;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub title: String,
    pub dashboard_url: Url,
    pub allowed_origin: Url,
    pub window_width: f64,
    pub window_height: f64,
    pub tray_icon_size: u32,
}

impl ShellConfig {
    /// Build a config for a different dashboard. Used by tests and kept
    /// fallible because both URLs are parsed.
    pub fn for_dashboard(dashboard_url: &str, allowed_origin: &str) -> ShellResult<Self> {
        Ok(Self {
            title: APP_TITLE.to_string(),
            dashboard_url: Url::parse(dashboard_url)
                .with_context(|| format!("invalid dashboard URL {dashboard_url:?}"))?,
            allowed_origin: Url::parse(allowed_origin)
                .with_context(|| format!("invalid allowed origin {allowed_origin:?}"))?,
            window_width: 1280.0,
            window_height: 800.0,
            tray_icon_size: TRAY_ICON_SIZE,
        })
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        // Both constants are literals checked by the tests below.
        Self::for_dashboard(DASHBOARD_URL, ALLOWED_ORIGIN)
            .expect("built-in dashboard URLs are valid")
    }
}
