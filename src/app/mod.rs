//! Application lifecycle and platform integration.
//!
//! - `host`: traits at the OS seam and their Tauri implementation
//! - `lifecycle`: window/tray state machine
//! - `navigation`: origin containment for navigations and popups
//! - `window`: main webview construction
//! - `tray`: tray icon and menu
//! - `autostart`: "Open at login" preference and OS registration
//! - `shortcut`: global show/focus shortcut
//! - `events`: window, menu and run-loop event dispatch

pub mod autostart;
pub mod events;
pub mod host;
pub mod icon;
pub mod lifecycle;
pub mod logging;
pub mod navigation;
pub mod platform;
pub mod window;

#[cfg(desktop)]
pub mod shortcut;
#[cfg(desktop)]
pub mod tray;

#[cfg(test)]
pub(crate) mod testing;

use parking_lot::Mutex;
use tauri::{AppHandle, Manager};

use crate::config::{PreferenceStore, ShellConfig};
use crate::error::ShellResult;
use autostart::Autostart;
use host::TauriHost;
use lifecycle::Lifecycle;
use navigation::NavigationGuard;
use platform::Platform;

/// Process-wide owner of everything the handlers share. Managed by Tauri.
pub struct ShellState {
    pub config: ShellConfig,
    pub store: PreferenceStore,
    pub guard: NavigationGuard,
    pub platform: Platform,
    lifecycle: Mutex<Lifecycle>,
}

impl ShellState {
    pub fn new(config: ShellConfig, store: PreferenceStore, platform: Platform) -> Self {
        let guard = NavigationGuard::new(config.allowed_origin.clone());
        Self {
            config,
            store,
            guard,
            platform,
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        *self.lifecycle.lock()
    }

    /// Run a lifecycle transition. The lock is not held while `f` runs:
    /// host calls can re-enter through window events (e.g. `Destroyed`).
    /// Only the fields `f` changed are written back, so a field set by a
    /// re-entrant update survives unless `f` changed it too.
    pub fn update_lifecycle<T>(&self, f: impl FnOnce(&mut Lifecycle) -> T) -> T {
        let before = self.lifecycle();
        let mut after = before;
        let out = f(&mut after);
        self.lifecycle.lock().merge_changes(before, after);
        out
    }
}

/// Show and focus the main window, creating it when absent.
pub fn show_main_window(app: &AppHandle) {
    let Some(state) = app.try_state::<ShellState>() else {
        return;
    };
    let host = TauriHost::new(app);
    if let Err(e) = state.update_lifecycle(|lifecycle| lifecycle.show_main_window(&host)) {
        log::error!("[APP] failed to show main window: {}", e);
    }
}

/// Global shortcut action.
pub fn toggle_main_window(app: &AppHandle) {
    let Some(state) = app.try_state::<ShellState>() else {
        return;
    };
    let host = TauriHost::new(app);
    if let Err(e) = state.update_lifecycle(|lifecycle| lifecycle.toggle_from_shortcut(&host)) {
        log::error!("[APP] failed to toggle main window: {}", e);
    }
}

/// Startup: window, then tray, then shortcut, then the saved autostart
/// preference. Only a missing app data directory aborts.
pub fn setup(app: &AppHandle) -> ShellResult<()> {
    logging::init(app);

    let store = PreferenceStore::in_dir(app.path().app_data_dir()?);
    log::info!("[APP] preferences at {}", store.path().display());
    app.manage(ShellState::new(
        ShellConfig::default(),
        store,
        Platform::current(),
    ));
    let state = app.state::<ShellState>();

    show_main_window(app);

    #[cfg(desktop)]
    {
        match tray::create_tray(app) {
            Ok(()) => state.update_lifecycle(|lifecycle| lifecycle.tray_created()),
            Err(e) => log::error!("[APP] tray unavailable, closing will quit: {}", e),
        }

        if let Err(e) = shortcut::register(app, state.platform) {
            log::warn!("[APP] {}", e);
        }
    }

    Autostart::new(&state.store, &TauriHost::new(app)).apply_at_startup();

    Ok(())
}
