//! Log output
//!
//! The alternate screen owns the terminal, so events are written to a file
//! under the user's data directory instead of stderr.

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the log directory
pub const LOG_FILE: &str = "signin-tui.log";

const DEFAULT_FILTER: &str = "signin_tui=info";

/// Non-blocking writer appending to `dir/LOG_FILE`, creating `dir` if needed
pub fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines when dropped, so hold it until
/// exit. Without a log directory nothing is installed.
pub fn init(dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    let (writer, guard) = file_writer(dir)?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_events_land_in_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let (writer, guard) = file_writer(&log_dir).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("sign-in finished");
        });
        drop(guard);

        let content = fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
        assert!(content.contains("sign-in finished"), "log was: {content}");
    }

    #[test]
    fn test_init_without_directory_is_noop() {
        assert!(init(None).unwrap().is_none());
    }
}
