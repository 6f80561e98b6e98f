//! Logger initialization for the shell.
//!
//! Mobile hosts usually pick `Terminal` (stdout ends up in logcat / the
//! device console); `File` is for desktop harnesses.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "./shofyou.log";

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file, truncating it.
    File(PathBuf),
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both the file and the terminal.
    Both(PathBuf),
}

/// Installs the global logger. Later calls are ignored.
///
/// A log file that cannot be created is reported on stderr and skipped, so
/// the shell still starts.
pub fn initialize(destination: &LogDestination, level: LevelFilter) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both(_)) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let LogDestination::File(path) | LogDestination::Both(path) = destination {
        match create_file_logger(level, config, path) {
            Ok(file_logger) => loggers.push(file_logger),
            Err(err) => eprintln!("Warning: {err:#}"),
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &Path,
) -> anyhow::Result<Box<WriteLogger<File>>> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file at {}", path.display()))?;
    Ok(WriteLogger::new(level, config, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.log");

        let logger = create_file_logger(LevelFilter::Info, build_config(), &path);

        assert!(logger.is_ok());
        assert!(path.is_file());
    }

    #[test]
    fn file_logger_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shell.log");

        let Err(err) = create_file_logger(LevelFilter::Info, build_config(), &path) else {
            panic!("log file under a missing directory should not be creatable");
        };

        assert!(err.to_string().contains("could not create log file"));
    }
}
