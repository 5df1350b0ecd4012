//! Icon lookup and decoding for the window and tray.

use std::path::{Path, PathBuf};

use tauri::image::Image;

use crate::config::app::{ICON_BASENAME, ICON_EXTENSIONS};
use crate::error::ShellResult;

/// First `icon.<ext>` in `dir` that exists, in [`ICON_EXTENSIONS`] order.
///
/// When none exists the preferred-format path is returned anyway; loading it
/// fails later and the platform default icon is used instead.
pub fn resolve_icon_path(dir: &Path) -> PathBuf {
    resolve_with(dir, &ICON_EXTENSIONS)
}

fn resolve_with(dir: &Path, extensions: &[&str]) -> PathBuf {
    extensions
        .iter()
        .map(|ext| dir.join(format!("{ICON_BASENAME}.{ext}")))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| dir.join(format!("{ICON_BASENAME}.{}", extensions[0])))
}

/// Decode an icon at its native size.
pub fn load_icon(path: &Path) -> Option<Image<'static>> {
    decode(path, None)
        .map_err(|e| log::warn!("[ICON] cannot load {}: {}", path.display(), e))
        .ok()
}

/// Decode an icon and scale it to an `edge` x `edge` square for the tray.
pub fn load_tray_icon(path: &Path, edge: u32) -> Option<Image<'static>> {
    decode(path, Some(edge))
        .map_err(|e| log::warn!("[ICON] cannot load tray icon {}: {}", path.display(), e))
        .ok()
}

fn decode(path: &Path, edge: Option<u32>) -> ShellResult<Image<'static>> {
    let mut img = image::open(path)?;
    if let Some(edge) = edge {
        img = img.resize_exact(edge, edge, image::imageops::FilterType::Lanczos3);
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Image::new_owned(rgba.into_raw(), width, height))
}
