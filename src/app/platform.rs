//! Platform capability probe. The only place with target `cfg` checks for
//! shell behaviour.

#[cfg(desktop)]
use tauri_plugin_global_shortcut::{Code, Modifiers, Shortcut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    os: Os,
}

impl Platform {
    pub const fn new(os: Os) -> Self {
        Self { os }
    }

    pub const fn current() -> Self {
        let os = if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else {
            Os::Other
        };
        Self { os }
    }

    #[cfg(test)]
    pub fn os(&self) -> Os {
        self.os
    }

    /// Whether the autostart plugin can register a login item here
    /// (registry Run key, LaunchAgent, or XDG autostart entry).
    pub fn supports_login_item_registration(&self) -> bool {
        matches!(self.os, Os::Windows | Os::MacOs | Os::Linux)
    }

    /// Human readable accelerator, for logs.
    pub fn shortcut_label(&self) -> &'static str {
        match self.os {
            Os::MacOs => "Command+Shift+V",
            _ => "Control+Shift+V",
        }
    }

    #[cfg(desktop)]
    pub fn toggle_shortcut(&self) -> Shortcut {
        let primary = match self.os {
            Os::MacOs => Modifiers::SUPER,
            _ => Modifiers::CONTROL,
        };
        Shortcut::new(Some(primary | Modifiers::SHIFT), Code::KeyV)
    }
}
