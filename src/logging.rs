//! File-backed logging. The console belongs to the menu, so diagnostics go to
//! rotating files in the configured log directory instead.

use std::fs;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::config::AppConfig;

const LOG_FILE_BASENAME: &str = "student-crud";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the logger. The returned handle must stay alive for as long as
/// records should be flushed to disk.
pub fn init_logging(config: &AppConfig) -> Result<LoggerHandle> {
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            config.log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(&config.log_level)
        .with_context(|| format!("invalid log level `{}`", config.log_level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start module=app status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        config.log_level
    );
    Ok(handle)
}
