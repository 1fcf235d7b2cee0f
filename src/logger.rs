//! Logging setup for the bootstrap binary.
//!
//! The level is picked from `-v` flags first, then `VITE_ENABLE_DEBUG_MODE`,
//! then `info`. `RUST_LOG` refines the filter unless the level was forced on
//! the command line. Call [`select`] then [`init`] once at startup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Where the chosen level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Cli,
    DebugFlag,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub source: LevelSource,
}

impl LogSettings {
    /// A level forced with `-v` overrides `RUST_LOG`.
    pub fn honours_rust_log(&self) -> bool {
        self.source != LevelSource::Cli
    }

    fn filter(&self) -> EnvFilter {
        if self.honours_rust_log() {
            EnvFilter::builder()
                .with_default_directive(self.level.into())
                .from_env_lossy()
        } else {
            EnvFilter::default().add_directive(self.level.into())
        }
    }
}

/// Pick the startup level. An unparseable `cli_level` is an error rather
/// than a silent fallback.
pub fn select(cli_level: Option<&str>, debug_mode: bool) -> Result<LogSettings, AppError> {
    let (raw, source) = match cli_level {
        Some(level) => (level, LevelSource::Cli),
        None if debug_mode => ("debug", LevelSource::DebugFlag),
        None => ("info", LevelSource::Fallback),
    };
    Ok(LogSettings {
        level: parse_level(raw)?,
        source,
    })
}

/// Install the global subscriber, writing to stderr.
pub fn init(settings: &LogSettings) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(settings.filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"` or `"off"`.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins_over_debug_flag() {
        let s = select(Some("warn"), true).unwrap();
        assert_eq!(s.level, LevelFilter::WARN);
        assert_eq!(s.source, LevelSource::Cli);
        assert!(!s.honours_rust_log());
    }

    #[test]
    fn debug_flag_raises_default_level() {
        let s = select(None, true).unwrap();
        assert_eq!(s.level, LevelFilter::DEBUG);
        assert_eq!(s.source, LevelSource::DebugFlag);
        assert!(s.honours_rust_log());
    }

    #[test]
    fn info_without_flags() {
        let s = select(None, false).unwrap();
        assert_eq!(s.level, LevelFilter::INFO);
        assert_eq!(s.source, LevelSource::Fallback);
    }

    #[test]
    fn bad_cli_level_is_reported() {
        let err = select(Some("loud"), false).unwrap_err();
        assert!(err.to_string().contains("unrecognised log level: 'loud'"));
    }

    #[test]
    fn parse_level_edge_cases() {
        assert_eq!(parse_level("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_level("").is_err());
        assert!(parse_level("INFO_LEVEL").is_err());
    }

    #[test]
    fn init_once_per_process() {
        // Another test may have installed a subscriber first.
        match init(&select(None, false).unwrap()) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
