//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger. Calling this more than once is harmless.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `-v` flags win over the configured level; default is `warn`.
pub fn level_for(verbosity: u8, configured: Option<&str>) -> (LevelFilter, Option<String>) {
    match verbosity {
        0 => match configured {
            None => (LevelFilter::Warn, None),
            Some(name) => match name.parse::<LevelFilter>() {
                Ok(level) => (level, None),
                Err(_) => (
                    LevelFilter::Warn,
                    Some(format!("Unknown log level '{}'; using 'warn'", name)),
                ),
            },
        },
        1 => (LevelFilter::Debug, None),
        _ => (LevelFilter::Trace, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults_to_warn() {
        assert_eq!(level_for(0, None), (LevelFilter::Warn, None));
    }

    #[test]
    fn test_verbosity_overrides_config() {
        assert_eq!(level_for(1, Some("error")).0, LevelFilter::Debug);
        assert_eq!(level_for(3, None).0, LevelFilter::Trace);
    }

    #[test]
    fn test_configured_level() {
        assert_eq!(level_for(0, Some("info")).0, LevelFilter::Info);
        let (level, warning) = level_for(0, Some("loud"));
        assert_eq!(level, LevelFilter::Warn);
        assert!(warning.is_some());
    }
}
