//! Right-click menu for the dashboard content.
//!
//! The page script reports the click position and whether history allows
//! going back or forward; the menu itself is native.

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::{command, LogicalPosition, Runtime, WebviewWindow};

use crate::app::host::WindowHost;
use crate::config::app::MAIN_WINDOW_LABEL;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Back,
    Forward,
    Reload,
}

impl ContextAction {
    pub fn id(self) -> &'static str {
        match self {
            ContextAction::Back => "ctx.back",
            ContextAction::Forward => "ctx.forward",
            ContextAction::Reload => "ctx.reload",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContextAction::Back => "Back",
            ContextAction::Forward => "Forward",
            ContextAction::Reload => "Reload",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [ContextAction::Back, ContextAction::Forward, ContextAction::Reload]
            .into_iter()
            .find(|action| action.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextEntry {
    Item { action: ContextAction, enabled: bool },
    Separator,
}

/// Back / Forward / separator / Reload, with Back and Forward enabled only
/// when history permits.
pub fn context_menu_entries(can_go_back: bool, can_go_forward: bool) -> [ContextEntry; 4] {
    [
        ContextEntry::Item {
            action: ContextAction::Back,
            enabled: can_go_back,
        },
        ContextEntry::Item {
            action: ContextAction::Forward,
            enabled: can_go_forward,
        },
        ContextEntry::Separator,
        ContextEntry::Item {
            action: ContextAction::Reload,
            enabled: true,
        },
    ]
}

fn build_context_menu<R: Runtime>(
    window: &WebviewWindow<R>,
    can_go_back: bool,
    can_go_forward: bool,
) -> tauri::Result<Menu<R>> {
    let menu = Menu::new(window)?;
    for entry in context_menu_entries(can_go_back, can_go_forward) {
        match entry {
            ContextEntry::Item { action, enabled } => {
                menu.append(&MenuItem::with_id(
                    window,
                    action.id(),
                    action.label(),
                    enabled,
                    None::<&str>,
                )?)?;
            },
            ContextEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator(window)?)?;
            },
        }
    }
    Ok(menu)
}

/// Menu event entry point for `ctx.*` ids.
pub fn apply_context_action(action: ContextAction, window: &impl WindowHost) {
    let result = match action {
        ContextAction::Back => window.go_back(),
        ContextAction::Forward => window.go_forward(),
        ContextAction::Reload => window.reload(),
    };
    if let Err(e) = result {
        log::warn!("[CONTEXT_MENU] {:?} failed: {}", action, e);
    }
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Pop up the content menu at the cursor. Invoked by the page script.
#[command]
pub fn show_content_context_menu(
    window: WebviewWindow,
    x: f64,
    y: f64,
    can_go_back: bool,
    can_go_forward: bool,
) -> ShellResult<()> {
    if window.label() != MAIN_WINDOW_LABEL {
        return Ok(());
    }
    let menu = build_context_menu(&window, can_go_back, can_go_forward)?;
    window.popup_menu_at(&menu, LogicalPosition::new(x, y))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{Call, FakeHost};

    #[test]
    fn test_history_flags_drive_enabled_state() {
        let entries = context_menu_entries(false, true);
        assert_eq!(
            entries[0],
            ContextEntry::Item {
                action: ContextAction::Back,
                enabled: false
            }
        );
        assert_eq!(
            entries[1],
            ContextEntry::Item {
                action: ContextAction::Forward,
                enabled: true
            }
        );
        assert_eq!(entries[2], ContextEntry::Separator);
    }

    #[test]
    fn test_reload_always_enabled() {
        for (back, forward) in [(false, false), (true, true)] {
            assert_eq!(
                context_menu_entries(back, forward)[3],
                ContextEntry::Item {
                    action: ContextAction::Reload,
                    enabled: true
                }
            );
        }
    }

    #[test]
    fn test_action_ids_round_trip() {
        for action in [ContextAction::Back, ContextAction::Forward, ContextAction::Reload] {
            assert_eq!(ContextAction::from_id(action.id()), Some(action));
        }
        assert_eq!(ContextAction::from_id("tray.reload"), None);
    }

    #[test]
    fn test_actions_drive_window() {
        let host = FakeHost::with_window();
        apply_context_action(ContextAction::Back, &host);
        apply_context_action(ContextAction::Forward, &host);
        apply_context_action(ContextAction::Reload, &host);
        assert_eq!(host.calls(), vec![Call::GoBack, Call::GoForward, Call::Reload]);
    }

    #[test]
    fn test_action_without_window_is_harmless() {
        let host = FakeHost::default();
        apply_context_action(ContextAction::Reload, &host);
        assert!(host.calls().is_empty());
    }
}
