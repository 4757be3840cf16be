//! Logger setup. Library code logs through the `log` facade; the binary
//! installs `simple_logger` at the configured level.

use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

/// `[log]` section of the configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.level)
    }
}

/// Parse a level name, case-insensitively.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim()).map_err(|_| {
        ConfigError::Validation(format!(
            "log.level '{level}' is not one of off, error, warn, info, debug, trace"
        ))
    })
}

/// Install the global logger at `level`. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .init()?;
    set_level(level);
    Ok(())
}

/// Change the level after [`init`], e.g. once the config file is read.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_accepts_known_names() {
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level(" debug ").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("trace").unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("loud").unwrap_err();
        assert!(err.to_string().contains("log.level 'loud'"));
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(LogConfig::default().level_filter().unwrap(), LevelFilter::Warn);
    }
}
