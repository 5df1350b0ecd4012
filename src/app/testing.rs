//! Recording fake for the host traits.

use std::cell::{Cell, RefCell};

use tauri::Url;

use super::host::{ExternalBrowser, LoginItems, TrayHost, WindowHost};
use crate::error::{ShellError, ShellResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateWindow,
    ShowWindow,
    FocusWindow,
    HideWindow,
    LoadUrl(String),
    Reload,
    GoBack,
    GoForward,
    DestroyWindow,
    RemoveTray,
    OpenExternal(String),
    RegisterLoginItem(bool),
}

#[derive(Default)]
pub struct FakeHost {
    calls: RefCell<Vec<Call>>,
    window: Cell<bool>,
    visible: Cell<bool>,
    unsupported_login_items: Cell<bool>,
    external_open_fails: Cell<bool>,
    login_item_fails: Cell<bool>,
}

impl FakeHost {
    pub fn with_window() -> Self {
        let host = Self::default();
        host.window.set(true);
        host.visible.set(true);
        host
    }

    pub fn without_login_items(self) -> Self {
        self.unsupported_login_items.set(true);
        self
    }

    pub fn fail_external_open(&self) {
        self.external_open_fails.set(true);
    }

    pub fn fail_login_item(&self) {
        self.login_item_fails.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn has_window(&self) -> bool {
        self.window.get()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn require_window(&self) -> ShellResult<()> {
        if self.window.get() {
            Ok(())
        } else {
            Err(ShellError::Window("main window does not exist".to_string()))
        }
    }
}

impl WindowHost for FakeHost {
    fn window_exists(&self) -> bool {
        self.window.get()
    }

    fn create_window(&self) -> ShellResult<()> {
        self.record(Call::CreateWindow);
        self.window.set(true);
        self.visible.set(true);
        Ok(())
    }

    fn window_visible(&self) -> bool {
        self.window.get() && self.visible.get()
    }

    fn show_window(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::ShowWindow);
        self.visible.set(true);
        Ok(())
    }

    fn focus_window(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::FocusWindow);
        Ok(())
    }

    fn hide_window(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::HideWindow);
        self.visible.set(false);
        Ok(())
    }

    fn load_url(&self, url: &Url) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::LoadUrl(url.to_string()));
        Ok(())
    }

    fn reload(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::Reload);
        Ok(())
    }

    fn go_back(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::GoBack);
        Ok(())
    }

    fn go_forward(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::GoForward);
        Ok(())
    }

    fn destroy_window(&self) -> ShellResult<()> {
        self.require_window()?;
        self.record(Call::DestroyWindow);
        self.window.set(false);
        self.visible.set(false);
        Ok(())
    }
}

impl TrayHost for FakeHost {
    fn remove_tray(&self) {
        self.record(Call::RemoveTray);
    }
}

impl ExternalBrowser for FakeHost {
    fn open_external(&self, url: &Url) -> ShellResult<()> {
        self.record(Call::OpenExternal(url.to_string()));
        if self.external_open_fails.get() {
            return Err(ShellError::Opener(url.to_string()));
        }
        Ok(())
    }
}

impl LoginItems for FakeHost {
    fn supports_login_item_registration(&self) -> bool {
        !self.unsupported_login_items.get()
    }

    fn register_login_item(&self, enabled: bool) -> ShellResult<()> {
        self.record(Call::RegisterLoginItem(enabled));
        if self.login_item_fails.get() {
            return Err(ShellError::Autostart("registry write denied".to_string()));
        }
        Ok(())
    }
}
