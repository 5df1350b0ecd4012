//! OS-facing seams of the shell.
//!
//! Lifecycle, navigation and autostart logic talk to these traits only.
//! `TauriHost` is the real implementation; tests use the recording fake in
//! `app::testing`.

use tauri::{AppHandle, Manager, Url};

use crate::config::app::MAIN_WINDOW_LABEL;
#[cfg(desktop)]
use crate::config::app::TRAY_ID;
use crate::error::{ShellError, ShellResult};

/// The single main window.
pub trait WindowHost {
    fn window_exists(&self) -> bool;
    fn create_window(&self) -> ShellResult<()>;
    fn window_visible(&self) -> bool;
    /// Show, unminimize and focus.
    fn show_window(&self) -> ShellResult<()>;
    fn focus_window(&self) -> ShellResult<()>;
    fn hide_window(&self) -> ShellResult<()>;
    fn load_url(&self, url: &Url) -> ShellResult<()>;
    fn reload(&self) -> ShellResult<()>;
    fn go_back(&self) -> ShellResult<()>;
    fn go_forward(&self) -> ShellResult<()>;
    fn destroy_window(&self) -> ShellResult<()>;
}

/// The single tray icon.
pub trait TrayHost {
    fn remove_tray(&self);
}

/// The system's default browser.
pub trait ExternalBrowser {
    fn open_external(&self, url: &Url) -> ShellResult<()>;
}

/// OS "launch at login" registration.
pub trait LoginItems {
    fn supports_login_item_registration(&self) -> bool;
    fn register_login_item(&self, enabled: bool) -> ShellResult<()>;
}

/// Host backed by a running Tauri app.
#[derive(Clone)]
pub struct TauriHost {
    app: AppHandle,
}

impl TauriHost {
    pub fn new(app: &AppHandle) -> Self {
        Self { app: app.clone() }
    }

    fn window(&self) -> ShellResult<tauri::WebviewWindow> {
        self.app
            .get_webview_window(MAIN_WINDOW_LABEL)
            .ok_or_else(|| ShellError::Window("main window does not exist".to_string()))
    }
}

impl WindowHost for TauriHost {
    fn window_exists(&self) -> bool {
        self.app.get_webview_window(MAIN_WINDOW_LABEL).is_some()
    }

    fn create_window(&self) -> ShellResult<()> {
        super::window::create_main_window(&self.app).map(|_| ())
    }

    fn window_visible(&self) -> bool {
        self.window()
            .and_then(|w| Ok(w.is_visible()?))
            .unwrap_or(false)
    }

    fn show_window(&self) -> ShellResult<()> {
        let window = self.window()?;
        window.show()?;
        window.unminimize()?;
        window.set_focus()?;
        Ok(())
    }

    fn focus_window(&self) -> ShellResult<()> {
        Ok(self.window()?.set_focus()?)
    }

    fn hide_window(&self) -> ShellResult<()> {
        Ok(self.window()?.hide()?)
    }

    fn load_url(&self, url: &Url) -> ShellResult<()> {
        Ok(self.window()?.navigate(url.clone())?)
    }

    fn reload(&self) -> ShellResult<()> {
        Ok(self.window()?.eval("window.location.reload()")?)
    }

    fn go_back(&self) -> ShellResult<()> {
        Ok(self.window()?.eval("history.back()")?)
    }

    fn go_forward(&self) -> ShellResult<()> {
        Ok(self.window()?.eval("history.forward()")?)
    }

    fn destroy_window(&self) -> ShellResult<()> {
        Ok(self.window()?.destroy()?)
    }
}

impl TrayHost for TauriHost {
    #[cfg(desktop)]
    fn remove_tray(&self) {
        if self.app.remove_tray_by_id(TRAY_ID).is_none() {
            log::debug!("[TRAY] remove requested but no tray was registered");
        }
    }

    #[cfg(not(desktop))]
    fn remove_tray(&self) {}
}

impl ExternalBrowser for TauriHost {
    fn open_external(&self, url: &Url) -> ShellResult<()> {
        use tauri_plugin_opener::OpenerExt;

        self.app
            .opener()
            .open_url(url.as_str(), None::<&str>)
            .map_err(|e| ShellError::Opener(format!("{url}: {e}")))
    }
}

impl LoginItems for TauriHost {
    fn supports_login_item_registration(&self) -> bool {
        super::platform::Platform::current().supports_login_item_registration()
    }

    #[cfg(desktop)]
    fn register_login_item(&self, enabled: bool) -> ShellResult<()> {
        use tauri_plugin_autostart::ManagerExt;

        let autostart_manager = self.app.autolaunch();
        let result = if enabled {
            autostart_manager.enable()
        } else {
            autostart_manager.disable()
        };
        result.map_err(|e| ShellError::Autostart(e.to_string()))
    }

    #[cfg(not(desktop))]
    fn register_login_item(&self, _enabled: bool) -> ShellResult<()> {
        Ok(())
    }
}
