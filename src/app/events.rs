//! Event dispatch.
//!
//! One handler per event kind, all on the main thread, each running to
//! completion before the next event is delivered.

use tauri::menu::MenuEvent;
use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};

use super::host::TauriHost;
use super::lifecycle::CloseAction;
#[cfg(desktop)]
use super::tray::{self, TrayAction};
use super::ShellState;
use crate::commands::context_menu::{self, ContextAction};
use crate::config::app::MAIN_WINDOW_LABEL;

/// Hooked into the builder's `on_window_event`.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }
    let Some(state) = window.try_state::<ShellState>() else {
        return;
    };

    match event {
        // Hide to tray instead of closing while the tray is up
        WindowEvent::CloseRequested { api, .. } => {
            let host = TauriHost::new(window.app_handle());
            let action = state.update_lifecycle(|lifecycle| lifecycle.on_close_requested(&host));
            if action == CloseAction::HideToTray {
                api.prevent_close();
            }
        },

        WindowEvent::Destroyed => {
            log::debug!("[WINDOW] destroyed");
            state.update_lifecycle(|lifecycle| lifecycle.window_destroyed());
        },

        _ => {},
    }
}

/// Hooked into the builder's `on_menu_event`; covers both the tray menu and
/// the content context menu.
pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let id: &str = event.id().as_ref();

    #[cfg(desktop)]
    if let Some(action) = TrayAction::from_id(id) {
        tray::handle_tray_action(app, action);
        return;
    }

    if let Some(action) = ContextAction::from_id(id) {
        context_menu::apply_context_action(action, &TauriHost::new(app));
    } else {
        log::debug!("[MENU] unhandled menu id {:?}", id);
    }
}

/// Passed to `App::run`.
pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // Dock icon clicked with no visible window
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => super::show_main_window(app),

        RunEvent::Exit => {
            #[cfg(desktop)]
            super::shortcut::unregister_all(app);
            log::info!("[APP] exiting");
        },

        _ => {},
    }
}
