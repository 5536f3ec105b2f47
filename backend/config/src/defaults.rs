//! Config defaults: fills unset values after loading.

use crate::schema::{AlbumKitConfig, LoggingConfig};

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_LOG_DIR: &str = "logs";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: AlbumKitConfig) -> AlbumKitConfig {
    apply_logging_defaults(config)
}

fn apply_logging_defaults(mut config: AlbumKitConfig) -> AlbumKitConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.dir.is_none() {
        logging.dir = Some(DEFAULT_LOG_DIR.to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_logging() {
        let config = apply_all_defaults(AlbumKitConfig::default());
        let logging = config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.dir.as_deref(), Some("logs"));
    }

    #[test]
    fn keeps_explicit_level() {
        let config = AlbumKitConfig {
            logging: Some(LoggingConfig {
                level: Some("trace".into()),
                dir: None,
            }),
            ..Default::default()
        };
        let logging = apply_all_defaults(config).logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("trace"));
        assert_eq!(logging.dir.as_deref(), Some("logs"));
    }
}
