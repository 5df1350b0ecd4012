//! Navigation containment.
//!
//! Every in-page navigation and every `window.open` is checked against the
//! allowed origin (scheme, host and port). Same-origin targets stay in the
//! main window; anything else goes to the default browser. Unparsable
//! targets are dropped.

use tauri::Url;

use super::host::{ExternalBrowser, WindowHost};

/// Outcome of an in-place navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    OpenExternal(Url),
    Block,
}

/// Outcome of a new-window check. The new window itself is never created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewWindowDecision {
    LoadInPlace(Url),
    OpenExternal(Url),
    Ignore,
}

#[derive(Debug, Clone)]
pub struct NavigationGuard {
    allowed: Url,
}

impl NavigationGuard {
    pub fn new(allowed_origin: Url) -> Self {
        Self {
            allowed: allowed_origin,
        }
    }

    pub fn is_allowed(&self, url: &Url) -> bool {
        // Opaque origins (data:, blob:, file:) never compare equal.
        url.origin() == self.allowed.origin()
    }

    pub fn check_navigation(&self, target: &str) -> NavigationDecision {
        match Url::parse(target) {
            Ok(url) if self.is_allowed(&url) => NavigationDecision::Allow,
            Ok(url) => NavigationDecision::OpenExternal(url),
            Err(_) => NavigationDecision::Block,
        }
    }

    pub fn check_new_window(&self, target: &str) -> NewWindowDecision {
        match Url::parse(target) {
            Ok(url) if self.is_allowed(&url) => NewWindowDecision::LoadInPlace(url),
            Ok(url) => NewWindowDecision::OpenExternal(url),
            Err(_) => NewWindowDecision::Ignore,
        }
    }

    /// In-place navigation handler. Returns whether the webview may proceed.
    pub fn on_will_navigate(&self, target: &str, browser: &impl ExternalBrowser) -> bool {
        match self.check_navigation(target) {
            NavigationDecision::Allow => true,
            NavigationDecision::OpenExternal(url) => {
                log::info!("[NAV] leaving origin, opening externally: {}", url);
                if let Err(e) = browser.open_external(&url) {
                    log::warn!("[NAV] {}", e);
                }
                false
            },
            NavigationDecision::Block => {
                log::warn!("[NAV] blocked unparsable navigation target {:?}", target);
                false
            },
        }
    }

    /// `window.open` handler. The request is always denied by the caller;
    /// this only decides where the URL ends up.
    pub fn on_new_window(
        &self,
        target: &str,
        window: &impl WindowHost,
        browser: &impl ExternalBrowser,
    ) {
        match self.check_new_window(target) {
            NewWindowDecision::LoadInPlace(url) => {
                log::debug!("[NAV] loading popup target in main window: {}", url);
                if let Err(e) = window.load_url(&url) {
                    log::warn!("[NAV] {}", e);
                }
            },
            NewWindowDecision::OpenExternal(url) => {
                log::info!("[NAV] popup leaves origin, opening externally: {}", url);
                if let Err(e) = browser.open_external(&url) {
                    log::warn!("[NAV] {}", e);
                }
            },
            NewWindowDecision::Ignore => {
                log::warn!("[NAV] ignored unparsable popup target {:?}", target);
            },
        }
    }
}
