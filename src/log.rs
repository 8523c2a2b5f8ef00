// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Logs go to `.store/debug.log` so stdout
/// only carries the report; `verbose` (or an unwritable log file) sends
/// them to stderr instead. Filter comes from `RUST_LOG`, default INFO.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_timer(Uptime::default());

    let file = if verbose { None } else { open_log_file() };
    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = match file {
        Some(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}

fn open_log_file() -> Option<fs::File> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
