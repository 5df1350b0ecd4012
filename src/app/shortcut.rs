//! System-wide show/focus shortcut.

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use super::platform::Platform;
use crate::error::{ShellError, ShellResult};

pub fn register(app: &AppHandle, platform: Platform) -> ShellResult<()> {
    app.global_shortcut()
        .on_shortcut(platform.toggle_shortcut(), |app, _shortcut, event| {
            if is_trigger(event.state) {
                super::toggle_main_window(app);
            }
        })
        .map_err(|e| ShellError::Shortcut(format!("{}: {}", platform.shortcut_label(), e)))?;

    log::info!("[SHORTCUT] registered {}", platform.shortcut_label());
    Ok(())
}

pub fn unregister_all(app: &AppHandle) {
    if let Err(e) = app.global_shortcut().unregister_all() {
        log::warn!("[SHORTCUT] failed to unregister: {}", e);
    }
}

/// Act on key-down only; the release would toggle a second time.
fn is_trigger(state: ShortcutState) -> bool {
    matches!(state, ShortcutState::Pressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_press_triggers() {
        assert!(is_trigger(ShortcutState::Pressed));
        assert!(!is_trigger(ShortcutState::Released));
    }
}
