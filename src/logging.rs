//! Log sink setup: append to a file or fall back to stderr.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing::Level;

use crate::config::LoggingConfig;
use crate::error::{Result, TallyError};

/// Map a configured level name onto a tracing level.
///
/// Unrecognized values silently mean INFO.
pub fn parse_level(raw: &str) -> Level {
    match raw {
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber per the `[logging]` section.
///
/// Must be called at most once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level);
    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| TallyError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_unknown_defaults_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("TRACE"), Level::INFO);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
