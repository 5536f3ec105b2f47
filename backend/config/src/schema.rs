//! Albumkit configuration schema, typed for serde YAML/JSON deserialization.

use albumkit_core::ParseMode;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumKitConfig {
    /// Bot session used for received albums
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Applied to media whose parse mode was left unset (`HTML`, `MarkdownV2`, `Markdown`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_parse_mode: Option<ParseMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `albumkit_core=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for the rolling NDJSON log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}
