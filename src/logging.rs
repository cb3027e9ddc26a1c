//! File logging. The terminal belongs to the UI, so events go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const APP_DIR: &str = "pokedex-lookup";
const LOG_FILE: &str = "pokedex-lookup.log";

pub fn default_log_path() -> PathBuf {
    dirs_next::cache_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE)
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(log_file: Option<PathBuf>) -> io::Result<PathBuf> {
    let path = log_file.unwrap_or_else(default_log_path);
    let file = open_log(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_log_file() {
        let path = default_log_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE)) || path.ends_with(LOG_FILE));
    }

    #[test]
    fn open_log_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("pokedex-lookup-test-{}", std::process::id()));
        let path = dir.join("nested").join(LOG_FILE);
        open_log(&path).expect("open log");
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
