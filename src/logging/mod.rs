// Logging setup: INFO and above to stdout, ERROR and above to an error file
// next to the executable. The error file is truncated on every startup so it
// only ever holds the current run.

use anyhow::Result;
use std::fs::File;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Install the global subscriber. The returned guard owns the error-file
/// writer thread; hold it in main so pending errors flush on every exit path.
pub fn init(err_path: &Path) -> Result<WorkerGuard> {
    // File::create truncates - clears the previous run's errors.
    let err_file = File::create(err_path)?;
    let (err_writer, guard) = tracing_appender::non_blocking(err_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_filter(LevelFilter::INFO),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(err_writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    Ok(guard)
}
