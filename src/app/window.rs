//! Main window construction.
//!
//! The webview gets no IPC beyond the context-menu command (see
//! `capabilities/dashboard.json`), keeps running while hidden, and every
//! navigation or popup goes through the [`NavigationGuard`]. The window
//! starts hidden and is shown once the first page has finished loading.
//!
//! [`NavigationGuard`]: super::navigation::NavigationGuard

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tauri::utils::config::BackgroundThrottlingPolicy;
use tauri::webview::{NewWindowResponse, PageLoadEvent};
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use super::host::TauriHost;
use super::{icon, ShellState};
use crate::config::app::{ASSETS_DIR, MAIN_WINDOW_LABEL};
use crate::error::{OptionExt, ShellResult};

/// Forwards right-clicks to `show_content_context_menu`.
const CONTEXT_MENU_SCRIPT: &str = include_str!("scripts/context_menu.js");

/// Hides scrollbars; wheel, touch and keyboard scrolling keep working.
const HIDE_SCROLLBARS_SCRIPT: &str = include_str!("scripts/hide_scrollbars.js");

/// Latch that is taken exactly once, by the first finished page load.
#[derive(Debug, Clone, Default)]
struct FirstLoad(Arc<AtomicBool>);

impl FirstLoad {
    fn take(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

/// Create the main window and start loading the dashboard.
pub fn create_main_window(app: &AppHandle) -> ShellResult<WebviewWindow> {
    let state = app
        .try_state::<ShellState>()
        .context("shell state is not initialized")?;
    let config = &state.config;
    let title = config.title.clone();

    let nav_guard = state.guard.clone();
    let nav_host = TauriHost::new(app);
    let popup_guard = state.guard.clone();
    let popup_host = TauriHost::new(app);
    let first_load = FirstLoad::default();

    let mut builder = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(config.dashboard_url.clone()),
    )
    .title(&config.title)
    .inner_size(config.window_width, config.window_height)
    .resizable(true)
    .center()
    .visible(false)
    .focused(true)
    .devtools(cfg!(debug_assertions))
    .background_throttling(BackgroundThrottlingPolicy::Disabled)
    .initialization_script(CONTEXT_MENU_SCRIPT)
    .on_navigation(move |url| nav_guard.on_will_navigate(url.as_str(), &nav_host))
    .on_new_window(move |url, _features| {
        popup_guard.on_new_window(url.as_str(), &popup_host, &popup_host);
        NewWindowResponse::Deny
    })
    .on_document_title_changed(move |window, _page_title| {
        if let Err(e) = window.set_title(&title) {
            log::warn!("[WINDOW] failed to restore title: {}", e);
        }
    })
    .on_page_load(move |window, payload| {
        if !matches!(payload.event(), PageLoadEvent::Finished) {
            return;
        }
        if let Err(e) = window.eval(HIDE_SCROLLBARS_SCRIPT) {
            log::warn!("[WINDOW] failed to inject scrollbar style: {}", e);
        }
        if first_load.take() {
            if let Err(e) = window.show().and_then(|()| window.set_focus()) {
                log::warn!("[WINDOW] failed to show after first load: {}", e);
            }
        }
    });

    if let Some(window_icon) = window_icon(app) {
        builder = builder.icon(window_icon)?;
    }

    let window = builder.build()?;
    log::info!("[WINDOW] created, loading {}", config.dashboard_url);
    Ok(window)
}

fn window_icon(app: &AppHandle) -> Option<tauri::image::Image<'static>> {
    let dir = app.path().resource_dir().ok()?.join(ASSETS_DIR);
    icon::load_icon(&icon::resolve_icon_path(&dir))
}
