//! Window/tray lifecycle.
//!
//! States are {NoWindow, WindowHidden, WindowVisible} x {NoTray, TrayActive}.
//! Startup goes straight to visible with an active tray. Closing the window
//! while the tray is up only hides it; quitting tears everything down.

use super::host::{TrayHost, WindowHost};
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    NoWindow,
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayState {
    NoTray,
    Active,
}

/// What to do with a close request on the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    HideToTray,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    window: WindowState,
    tray: TrayState,
    quitting: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            window: WindowState::NoWindow,
            tray: TrayState::NoTray,
            quitting: false,
        }
    }
}

impl Lifecycle {
    #[cfg(test)]
    pub fn window(&self) -> WindowState {
        self.window
    }

    #[cfg(test)]
    pub fn tray(&self) -> TrayState {
        self.tray
    }

    #[cfg(test)]
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn window_shown(&mut self) {
        self.window = WindowState::Visible;
    }

    pub fn window_hidden(&mut self) {
        if self.window != WindowState::NoWindow {
            self.window = WindowState::Hidden;
        }
    }

    pub fn window_destroyed(&mut self) {
        self.window = WindowState::NoWindow;
    }

    pub fn tray_created(&mut self) {
        self.tray = TrayState::Active;
    }

    /// Copy onto `self` only the fields that changed between `before` and
    /// `after`, leaving fields updated elsewhere in the meantime intact.
    pub fn merge_changes(&mut self, before: Lifecycle, after: Lifecycle) {
        if after.window != before.window {
            self.window = after.window;
        }
        if after.tray != before.tray {
            self.tray = after.tray;
        }
        if after.quitting != before.quitting {
            self.quitting = after.quitting;
        }
    }

    pub fn close_action(&self) -> CloseAction {
        if !self.quitting && self.tray == TrayState::Active {
            CloseAction::HideToTray
        } else {
            CloseAction::Close
        }
    }

    /// Bring the window up, creating it when it no longer exists.
    pub fn show_main_window(&mut self, host: &impl WindowHost) -> ShellResult<()> {
        if host.window_exists() {
            host.show_window()?;
        } else {
            host.create_window()?;
        }
        self.window_shown();
        Ok(())
    }

    /// Global shortcut: focus if visible, otherwise show (or create).
    pub fn toggle_from_shortcut(&mut self, host: &impl WindowHost) -> ShellResult<()> {
        if host.window_exists() && host.window_visible() {
            host.focus_window()?;
            self.window_shown();
            return Ok(());
        }
        self.show_main_window(host)
    }

    /// Handle a user close. Returns the action taken; on `HideToTray` the
    /// caller must prevent the close.
    pub fn on_close_requested(&mut self, host: &impl WindowHost) -> CloseAction {
        let action = self.close_action();
        if action == CloseAction::HideToTray {
            if let Err(e) = host.hide_window() {
                log::warn!("[LIFECYCLE] failed to hide window: {}", e);
            }
            self.window_hidden();
        }
        action
    }

    /// Tear down tray and window unconditionally. The caller exits the
    /// process afterwards.
    pub fn quit<H: WindowHost + TrayHost>(&mut self, host: &H) {
        self.quitting = true;

        if self.tray == TrayState::Active {
            host.remove_tray();
        }
        self.tray = TrayState::NoTray;

        if host.window_exists() {
            if let Err(e) = host.destroy_window() {
                log::warn!("[LIFECYCLE] failed to destroy window: {}", e);
            }
        }
        self.window = WindowState::NoWindow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{Call, FakeHost};

    fn started() -> (Lifecycle, FakeHost) {
        let host = FakeHost::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle.show_main_window(&host).unwrap();
        lifecycle.tray_created();
        host.clear();
        (lifecycle, host)
    }

    #[test]
    fn test_startup_reaches_visible_with_tray() {
        let host = FakeHost::default();
        let mut lifecycle = Lifecycle::default();
        assert_eq!(lifecycle.window(), WindowState::NoWindow);
        assert_eq!(lifecycle.tray(), TrayState::NoTray);

        lifecycle.show_main_window(&host).unwrap();
        lifecycle.tray_created();

        assert_eq!(host.calls(), vec![Call::CreateWindow]);
        assert_eq!(lifecycle.window(), WindowState::Visible);
        assert_eq!(lifecycle.tray(), TrayState::Active);
    }

    #[test]
    fn test_close_with_tray_hides_instead_of_destroying() {
        let (mut lifecycle, host) = started();

        let action = lifecycle.on_close_requested(&host);

        assert_eq!(action, CloseAction::HideToTray);
        assert_eq!(host.calls(), vec![Call::HideWindow]);
        assert!(host.has_window());
        assert!(!host.is_visible());
        assert_eq!(lifecycle.window(), WindowState::Hidden);
    }

    #[test]
    fn test_close_without_tray_closes() {
        let host = FakeHost::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle.show_main_window(&host).unwrap();
        host.clear();

        assert_eq!(lifecycle.on_close_requested(&host), CloseAction::Close);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_close_while_quitting_closes() {
        let (mut lifecycle, host) = started();
        lifecycle.quit(&host);
        assert_eq!(lifecycle.close_action(), CloseAction::Close);
    }

    #[test]
    fn test_show_reuses_hidden_window() {
        let (mut lifecycle, host) = started();
        lifecycle.on_close_requested(&host);
        host.clear();

        lifecycle.show_main_window(&host).unwrap();

        assert_eq!(host.calls(), vec![Call::ShowWindow]);
        assert_eq!(lifecycle.window(), WindowState::Visible);
    }

    #[test]
    fn test_show_recreates_destroyed_window() {
        let (mut lifecycle, host) = started();
        host.destroy_window().unwrap();
        lifecycle.window_destroyed();
        host.clear();

        lifecycle.show_main_window(&host).unwrap();

        assert_eq!(host.calls(), vec![Call::CreateWindow]);
        assert_eq!(lifecycle.window(), WindowState::Visible);
    }

    #[test]
    fn test_shortcut_focuses_visible_window() {
        let (mut lifecycle, host) = started();
        lifecycle.toggle_from_shortcut(&host).unwrap();
        assert_eq!(host.calls(), vec![Call::FocusWindow]);
    }

    #[test]
    fn test_shortcut_shows_hidden_window() {
        let (mut lifecycle, host) = started();
        lifecycle.on_close_requested(&host);
        host.clear();

        lifecycle.toggle_from_shortcut(&host).unwrap();

        assert_eq!(host.calls(), vec![Call::ShowWindow]);
        assert!(host.is_visible());
    }

    #[test]
    fn test_shortcut_creates_missing_window() {
        let host = FakeHost::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle.toggle_from_shortcut(&host).unwrap();
        assert_eq!(host.calls(), vec![Call::CreateWindow]);
        assert_eq!(host.count(|c| *c == Call::CreateWindow), 1);
    }

    #[test]
    fn test_quit_destroys_window_and_tray() {
        let (mut lifecycle, host) = started();

        lifecycle.quit(&host);

        assert_eq!(host.calls(), vec![Call::RemoveTray, Call::DestroyWindow]);
        assert!(!host.has_window());
        assert!(lifecycle.is_quitting());
        assert_eq!(lifecycle.window(), WindowState::NoWindow);
        assert_eq!(lifecycle.tray(), TrayState::NoTray);
    }

    #[test]
    fn test_quit_from_hidden_state() {
        let (mut lifecycle, host) = started();
        lifecycle.on_close_requested(&host);
        host.clear();

        lifecycle.quit(&host);

        assert_eq!(host.calls(), vec![Call::RemoveTray, Call::DestroyWindow]);
    }

    #[test]
    fn test_quit_without_window_only_removes_tray() {
        let host = FakeHost::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle.tray_created();

        lifecycle.quit(&host);

        assert_eq!(host.calls(), vec![Call::RemoveTray]);
    }

    #[test]
    fn test_merge_keeps_fields_changed_elsewhere() {
        let mut before = Lifecycle::default();
        before.window_shown();

        let mut after = before;
        after.tray_created();

        let mut current = before;
        current.window_destroyed();
        current.merge_changes(before, after);

        assert_eq!(current.window(), WindowState::NoWindow);
        assert_eq!(current.tray(), TrayState::Active);
    }

    #[test]
    fn test_merge_applies_overlapping_change() {
        let before = Lifecycle::default();
        let mut after = before;
        after.window_shown();

        let mut current = before;
        current.window_hidden();
        current.merge_changes(before, after);

        assert_eq!(current.window(), WindowState::Visible);
    }

    #[test]
    fn test_hidden_never_applies_without_window() {
        let mut lifecycle = Lifecycle::default();
        lifecycle.window_hidden();
        assert_eq!(lifecycle.window(), WindowState::NoWindow);
    }
}
