//! Platform-specific directory paths.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "budget";
const APPLICATION: &str = "budget-manager";

/// Old log files kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Location of the optional settings file.
///
/// - Linux: `~/.config/budget-manager/settings.json`
/// - macOS: `~/Library/Application Support/dev.budget.budget-manager/settings.json`
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Location of the log for the current run.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Archive the previous run's log under a timestamp and prune old archives.
///
/// Call before the logger opens `latest.log`.
pub fn rotate_logs() {
    let Some(latest) = log_file() else { return };
    let Some(dir) = latest.parent() else { return };

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }
    prune_logs(dir, MAX_OLD_LOGS);
}

/// Delete archived logs in `dir` beyond the newest `keep`.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    // timestamped names sort oldest first
    archived.sort_by_key(|e| e.file_name());
    let excess = archived.len().saturating_sub(keep);
    for entry in archived.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
