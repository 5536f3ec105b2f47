//! Config validation with path-qualified messages.

use crate::schema::AlbumKitConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Shape of a Bot API token: `<bot id>:<secret>`.
static BOT_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+:[A-Za-z0-9_-]+$").unwrap());

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

pub fn validate(config: &AlbumKitConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_telegram(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_telegram(config: &AlbumKitConfig, report: &mut ValidationReport) {
    let Some(telegram) = &config.telegram else {
        report.warn("telegram", "No Telegram section; albums will have no bot session");
        return;
    };
    let token = telegram.bot_token.trim();
    if token.is_empty() {
        report.error("telegram.botToken", "Bot token cannot be empty");
    } else if !BOT_TOKEN_PATTERN.is_match(token) {
        report.warn("telegram.botToken", "Bot token does not look like <id>:<secret>");
    }
}

fn validate_logging(config: &AlbumKitConfig, report: &mut ValidationReport) {
    let Some(level) = config.logging.as_ref().and_then(|l| l.level.as_deref()) else {
        return;
    };
    // Directives such as `albumkit_core=debug` are left to EnvFilter.
    if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        report.error("logging.level", format!("Unknown log level '{level}'"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{LoggingConfig, TelegramConfig};

    fn with_token(token: &str) -> AlbumKitConfig {
        AlbumKitConfig {
            telegram: Some(TelegramConfig {
                bot_token: token.into(),
                default_parse_mode: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn valid_token_passes() {
        let report = validate(&with_token("123456:AA-bb_CC"));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_token_is_error() {
        let report = validate(&with_token("  "));
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "telegram.botToken");
    }

    #[test]
    fn odd_token_is_warning() {
        let report = validate(&with_token("not-a-token"));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn missing_telegram_is_warning() {
        let report = validate(&AlbumKitConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].path, "telegram");
    }

    #[test]
    fn test_log_level_check() {
        let mut config = with_token("1:a");
        config.logging = Some(LoggingConfig {
            level: Some("loud".into()),
            dir: None,
        });
        assert!(!validate(&config).is_valid());

        config.logging = Some(LoggingConfig {
            level: Some("albumkit_core=debug".into()),
            dir: None,
        });
        assert!(validate(&config).is_valid());
    }
}
