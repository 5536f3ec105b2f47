//! `albumkit-config`: runtime configuration for the album tooling.
//!
//! Provides:
//! - Typed config schema (Telegram session, logging)
//! - YAML loading
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation and secret redaction

pub mod defaults;
pub mod env;
pub mod io;
pub mod redact;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{collect_referenced_vars, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, read_config_value};
pub use redact::redact;
pub use schema::{AlbumKitConfig, LoggingConfig, TelegramConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Load, substitute env vars, apply defaults and validate a config file.
pub async fn load_and_prepare(path: &Path) -> Result<AlbumKitConfig> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_and_prepare_with(path, &env).await
}

/// [`load_and_prepare`] with an explicit environment.
pub async fn load_and_prepare_with(
    path: &Path,
    env: &HashMap<String, String>,
) -> Result<AlbumKitConfig> {
    let raw = read_config_value(path).await?;
    let value: Value = resolve_env_vars_with(&raw, env).context("Failed to resolve env vars in config")?;

    tracing::debug!(config = %redact(&value), "Resolved config");

    let config: AlbumKitConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!("config at {} has {} error(s)", path.display(), report.errors.len());
    }

    Ok(config)
}
