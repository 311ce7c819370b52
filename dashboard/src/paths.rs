//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "dashboard";
const APPLICATION: &str = "dashboard";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, home of the log files.
///
/// - Linux: `$XDG_CACHE_HOME/dashboard` or `~/.cache/dashboard`
/// - macOS: `~/Library/Caches/dev.dashboard.dashboard`
/// - Windows: `C:\Users\<User>\AppData\Local\dashboard\dashboard\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/dashboard` or `~/.config/dashboard`
/// - macOS: `~/Library/Application Support/dev.dashboard.dashboard`
/// - Windows: `C:\Users\<User>\AppData\Roaming\dashboard\dashboard\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to a timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache);
    }
}

pub(crate) fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

/// Remove old log files, keeping only the most recent `keep`.
fn cleanup_old_logs(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "previous run").unwrap();

        rotate_logs_in(dir.path());

        let names = log_names(dir.path());
        assert_eq!(names.len(), 1);
        assert_ne!(names[0], LATEST_LOG);
        assert!(names[0].ends_with(".log"));
    }

    #[test]
    fn test_rotate_without_latest_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        rotate_logs_in(dir.path());
        assert!(log_names(dir.path()).is_empty());
    }

    #[test]
    fn test_cleanup_keeps_limit_and_latest() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("2024010{i}_000000.log")), "").unwrap();
        }
        fs::write(dir.path().join(LATEST_LOG), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        cleanup_old_logs(dir.path(), 2);

        let names = log_names(dir.path());
        let archived = names
            .iter()
            .filter(|n| n.ends_with(".log") && n.as_str() != LATEST_LOG)
            .count();
        assert_eq!(archived, 2);
        assert!(names.contains(&LATEST_LOG.to_string()));
        assert!(names.contains(&"notes.txt".to_string()));
    }
}
