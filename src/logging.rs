//! Logger setup for the binaries. The library itself only talks to `log`.

use std::fs::File;
use std::io;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

fn log_config() -> simplelog::Config {
    ConfigBuilder::new().set_time_format_rfc3339().build()
}

/// Send log output to the configured file. The interactive game owns the
/// terminal, so nothing may be written to stdout or stderr while it runs.
pub fn init_file_logger(config: &LoggingConfig) -> Result<(), ConfigError> {
    let level = config.level_filter()?;
    let file = File::create(&config.file).map_err(|e| ConfigError::LogFile {
        path: config.file.clone(),
        source: e,
    })?;
    // A logger may already be installed (tests, embedding); keep the first one.
    let _ = WriteLogger::init(level, log_config(), file);
    Ok(())
}

/// Send log output to stderr, keeping stdout free for program output.
pub fn init_stderr_logger(level: LevelFilter) {
    let _ = WriteLogger::init(level, log_config(), io::stderr());
}
