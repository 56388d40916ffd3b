mod app;
mod canvas;
mod error;
mod keys;
mod paths;
mod screen;
mod terminal;
mod widgets;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use budget_lib::Settings;
use log::{error, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (settings, settings_error) = match paths::settings_file() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    };

    if let Err(e) = init_logging(&settings) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Some(e) = settings_error {
        warn!("{}; falling back to defaults", e);
    }
    info!(
        "Budget Manager starting with {} fields",
        settings.catalogs.len()
    );

    if let Err(e) = App::new(settings).run().await {
        error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging(settings: &Settings) -> Result<(), AppError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("budget-tui.log"));
    let file = open_log_file(&path)?;

    let level = settings
        .log_level
        .parse()
        .unwrap_or(LevelFilter::Debug);
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    let log_error = |source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(log_error)?;
    }
    File::create(path).map_err(log_error)
}
