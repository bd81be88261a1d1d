#![forbid(unsafe_code)]

//! File-backed structured logging.
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one was asked for.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const FILTER_ENV: &str = "AUTOSCALE_LOG";

/// Directives used when [`FILTER_ENV`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `directives`, falling back to [`DEFAULT_FILTER`].
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = open_append(path)?;
    let directives = std::env::var(FILTER_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)?;
    tracing::info!(
        target: "autoscale.app",
        version = crate::cli::VERSION,
        log_file = %path.display(),
        "logging initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_when_unset() {
        assert_eq!(filter_from(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn custom_directives_are_kept() {
        let filter = filter_from(Some("autoscale.nav=debug"));
        assert!(filter.to_string().contains("autoscale.nav=debug"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = std::env::temp_dir().join("autoscale-missing-dir-for-log-test");
        let path = dir.join("nested").join("site.log");
        assert!(open_append(&path).is_err());
    }
}
