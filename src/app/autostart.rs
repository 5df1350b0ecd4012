//! "Open at login".
//!
//! The preference file is the source of truth; the OS login item follows it
//! where the platform can register one. Elsewhere the choice is still saved
//! and simply has no effect.

use super::host::LoginItems;
use crate::config::PreferenceStore;

pub struct Autostart<'a, L: LoginItems> {
    store: &'a PreferenceStore,
    login_items: &'a L,
}

impl<'a, L: LoginItems> Autostart<'a, L> {
    pub fn new(store: &'a PreferenceStore, login_items: &'a L) -> Self {
        Self { store, login_items }
    }

    pub fn get(&self) -> bool {
        self.store.load().open_at_login
    }

    pub fn set(&self, enabled: bool) {
        log::info!("[AUTOSTART] open at login -> {}", enabled);
        self.store.set_open_at_login(enabled);
        self.sync(enabled);
    }

    /// Re-assert a saved "on" at startup. A saved "off" is left alone.
    pub fn apply_at_startup(&self) {
        if self.get() {
            self.sync(true);
        }
    }

    fn sync(&self, enabled: bool) {
        if !self.login_items.supports_login_item_registration() {
            log::debug!("[AUTOSTART] no login item support on this platform");
            return;
        }
        if let Err(e) = self.login_items.register_login_item(enabled) {
            log::error!("[AUTOSTART] {}", e);
        }
    }
}
