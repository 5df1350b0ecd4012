//! System tray icon and its menu.
//!
//! The menu is rebuilt from the preference file right before it is shown
//! and after every toggle, so the "Open at login" check mark never goes
//! stale.

use tauri::{
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager, Runtime,
};

use super::autostart::Autostart;
use super::host::{LoginItems, TauriHost, TrayHost, WindowHost};
use super::lifecycle::Lifecycle;
use super::{icon, ShellState};
use crate::config::app::{ASSETS_DIR, TRAY_ID};
use crate::config::PreferenceStore;
use crate::error::{OptionExt, ShellError, ShellResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    Open,
    Reload,
    ToggleOpenAtLogin,
    Quit,
}

impl TrayAction {
    pub fn id(self) -> &'static str {
        match self {
            TrayAction::Open => "tray.open",
            TrayAction::Reload => "tray.reload",
            TrayAction::ToggleOpenAtLogin => "tray.open_at_login",
            TrayAction::Quit => "tray.quit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrayAction::Open => "Open Vercel",
            TrayAction::Reload => "Reload",
            TrayAction::ToggleOpenAtLogin => "Open at login",
            TrayAction::Quit => "Quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [
            TrayAction::Open,
            TrayAction::Reload,
            TrayAction::ToggleOpenAtLogin,
            TrayAction::Quit,
        ]
        .into_iter()
        .find(|action| action.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEntry {
    Item(TrayAction),
    Check(TrayAction, bool),
    Separator,
}

/// Menu layout for a given autostart state.
pub fn tray_menu_entries(open_at_login: bool) -> [TrayEntry; 6] {
    [
        TrayEntry::Item(TrayAction::Open),
        TrayEntry::Item(TrayAction::Reload),
        TrayEntry::Separator,
        TrayEntry::Check(TrayAction::ToggleOpenAtLogin, open_at_login),
        TrayEntry::Separator,
        TrayEntry::Item(TrayAction::Quit),
    ]
}

/// What the caller still has to do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayOutcome {
    Done,
    RebuildMenu,
    Exit,
}

pub fn apply_tray_action<H>(
    action: TrayAction,
    lifecycle: &mut Lifecycle,
    store: &PreferenceStore,
    host: &H,
) -> TrayOutcome
where
    H: WindowHost + TrayHost + LoginItems,
{
    match action {
        TrayAction::Open => {
            if let Err(e) = lifecycle.show_main_window(host) {
                log::error!("[TRAY] failed to open window: {}", e);
            }
            TrayOutcome::Done
        },
        TrayAction::Reload => {
            if host.window_exists() {
                if let Err(e) = host.reload() {
                    log::warn!("[TRAY] reload failed: {}", e);
                }
            }
            TrayOutcome::Done
        },
        TrayAction::ToggleOpenAtLogin => {
            let autostart = Autostart::new(store, host);
            autostart.set(!autostart.get());
            TrayOutcome::RebuildMenu
        },
        TrayAction::Quit => {
            lifecycle.quit(host);
            TrayOutcome::Exit
        },
    }
}

pub fn build_tray_menu<R: Runtime, M: Manager<R>>(
    manager: &M,
    open_at_login: bool,
) -> tauri::Result<Menu<R>> {
    let menu = Menu::new(manager)?;
    for entry in tray_menu_entries(open_at_login) {
        match entry {
            TrayEntry::Item(action) => {
                menu.append(&MenuItem::with_id(
                    manager,
                    action.id(),
                    action.label(),
                    true,
                    None::<&str>,
                )?)?;
            },
            TrayEntry::Check(action, checked) => {
                menu.append(&CheckMenuItem::with_id(
                    manager,
                    action.id(),
                    action.label(),
                    true,
                    checked,
                    None::<&str>,
                )?)?;
            },
            TrayEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator(manager)?)?;
            },
        }
    }
    Ok(menu)
}

/// Replace the tray menu with one reflecting the saved preference.
pub fn refresh_tray_menu(app: &AppHandle) -> ShellResult<()> {
    let state = app
        .try_state::<ShellState>()
        .context("shell state is not initialized")?;
    let tray = app
        .tray_by_id(TRAY_ID)
        .ok_or_else(|| ShellError::Tray("tray icon is gone".to_string()))?;
    let menu = build_tray_menu(app, state.store.load().open_at_login)?;
    tray.set_menu(Some(menu))?;
    Ok(())
}

/// Build the tray icon with its menu and click handling.
pub fn create_tray(app: &AppHandle) -> ShellResult<()> {
    let state = app
        .try_state::<ShellState>()
        .context("shell state is not initialized")?;
    let menu = build_tray_menu(app, state.store.load().open_at_login)?;

    let mut builder = TrayIconBuilder::<tauri::Wry>::with_id(TRAY_ID)
        .tooltip(&state.config.title)
        .menu(&menu)
        .show_menu_on_left_click(false);

    if let Some(tray_icon) = tray_icon(app, state.config.tray_icon_size) {
        builder = builder.icon(tray_icon);
    }

    #[cfg(target_os = "macos")]
    {
        builder = builder.icon_as_template(true);
    }

    builder
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state,
                ..
            } = event
            {
                let app = tray.app_handle();
                match (button, button_state) {
                    (MouseButton::Left, MouseButtonState::Up) => super::show_main_window(app),
                    // The menu opens on release; swap it in on press.
                    (MouseButton::Right, MouseButtonState::Down) => {
                        if let Err(e) = refresh_tray_menu(app) {
                            log::warn!("[TRAY] failed to rebuild menu: {}", e);
                        }
                    },
                    _ => {},
                }
            }
        })
        .build(app)
        .map_err(|e| ShellError::Tray(format!("failed to build tray icon: {e}")))?;

    Ok(())
}

/// Menu event entry point for tray ids.
pub fn handle_tray_action(app: &AppHandle, action: TrayAction) {
    let Some(state) = app.try_state::<ShellState>() else {
        return;
    };
    let host = TauriHost::new(app);
    let outcome =
        state.update_lifecycle(|lifecycle| apply_tray_action(action, lifecycle, &state.store, &host));

    match outcome {
        TrayOutcome::Done => {},
        TrayOutcome::RebuildMenu => {
            if let Err(e) = refresh_tray_menu(app) {
                log::warn!("[TRAY] failed to rebuild menu: {}", e);
            }
        },
        TrayOutcome::Exit => {
            log::info!("[TRAY] quit requested");
            app.exit(0);
        },
    }
}

fn tray_icon(app: &AppHandle, edge: u32) -> Option<tauri::image::Image<'static>> {
    let from_assets = app
        .path()
        .resource_dir()
        .ok()
        .map(|dir| icon::resolve_icon_path(&dir.join(ASSETS_DIR)))
        .and_then(|path| icon::load_tray_icon(&path, edge));

    from_assets.or_else(|| app.default_window_icon().map(|icon| icon.clone().to_owned()))
}
