//! Logging setup.
//!
//! `env_logger` behind the `log` facade, defaulting to `info` (override with
//! `RUST_LOG`). Records go to stderr and to a daily file in the app log
//! directory; only the newest [`MAX_LOG_FILES`] files are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use env_logger::{Env, Target};
use tauri::{AppHandle, Manager};

use crate::error::{ShellError, ShellResult};

/// Maximum number of log files to keep
const MAX_LOG_FILES: usize = 5;

const LOG_FILE_PREFIX: &str = "vercel-desktop";

/// Initialize the logger. Falls back to stderr only if the log file cannot
/// be opened.
pub fn init(app: &AppHandle) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();

    let log_file = app
        .path()
        .app_log_dir()
        .map_err(ShellError::from)
        .and_then(|dir| open_log_file(&dir).map(|file| (dir, file)));

    let log_dir = match log_file {
        Ok((dir, file)) => {
            builder.target(Target::Pipe(Box::new(TeeWriter { file })));
            Some(dir)
        },
        Err(e) => {
            eprintln!("[LOG] file logging disabled: {}", e);
            None
        },
    };

    if builder.try_init().is_err() {
        // Already initialized (e.g. second setup in tests).
        return;
    }

    if let Some(dir) = log_dir {
        log::info!("[LOG] writing to {}", dir.display());
    }
}

fn open_log_file(dir: &Path) -> ShellResult<File> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(current_log_path(dir, Local::now().date_naive()))?;
    cleanup_old_logs(dir, MAX_LOG_FILES);
    Ok(file)
}

/// One file per day.
fn current_log_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_{}.log", LOG_FILE_PREFIX, date.format("%Y-%m-%d")))
}

/// Delete all but the `keep` most recently modified `.log` files.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "log"))
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for entry in log_files.into_iter().skip(keep) {
        let _ = fs::remove_file(entry.path());
    }
}

/// Writes every record to stderr and the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = io::stderr().write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let path = current_log_path(Path::new("logs"), date);
        assert_eq!(path, Path::new("logs").join("vercel-desktop_2026-03-09.log"));
    }

    #[test]
    fn test_cleanup_keeps_newest_logs_only() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=8 {
            fs::write(dir.path().join(format!("vercel-desktop_2026-01-0{day}.log")), b"x").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();

        cleanup_old_logs(dir.path(), 5);

        let remaining: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        let logs = remaining
            .iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "log"))
            .count();
        assert_eq!(logs, 5);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        cleanup_old_logs(&dir.path().join("absent"), 5);
    }

    #[test]
    fn test_open_log_file_creates_dir_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let mut file = open_log_file(&log_dir).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);
        let mut file = open_log_file(&log_dir).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let path = current_log_path(&log_dir, Local::now().date_naive());
        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }
}
