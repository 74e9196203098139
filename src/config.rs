//! Configuration file support for detect-rapid-report.
//!
//! Provides YAML-based configuration through `detect-rapid-report.config.yml`
//! files, including data structures, file loading, and validation.
//! API tokens are not part of the schema; they come from the
//! command line or the environment only.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{OutputFormat, MAX_CONCURRENT_LOOKUPS, MAX_SEARCH_LIMIT};
use crate::logging::LogFormat;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "detect-rapid-report.config.yml";

/// Keys that must never be read from a config file
const SECRET_KEYS: [&str; 3] = ["blackduck_api_token", "github_token", "api_token"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub blackduck_url: Option<String>,
    pub format: Option<String>,
    pub search_limit: Option<usize>,
    pub max_concurrent_lookups: Option<usize>,
    pub fail_on_violations: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(reason: String, hint: &str) -> anyhow::Error {
    ReportError::InvalidConfiguration {
        reason,
        hint: hint.to_string(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(key) = SECRET_KEYS
        .iter()
        .find(|key| config.unknown_fields.contains_key(**key))
    {
        return Err(invalid(
            format!("'{}' must not be stored in the config file", key),
            "Pass tokens with --blackduck-api-token/--github-token or the BLACKDUCK_API_TOKEN/GITHUB_TOKEN environment variables.",
        ));
    }

    if let Some(url) = config.blackduck_url.as_deref() {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(invalid(
                format!("blackduck_url must be an http(s) URL, got '{}'", url),
                "Use the full server URL, e.g. https://blackduck.example.com",
            ));
        }
    }

    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(|e| invalid(e, "Use 'markdown' or 'json'."))?;
    }

    if let Some(search_limit) = config.search_limit {
        if !(1..=MAX_SEARCH_LIMIT).contains(&search_limit) {
            return Err(invalid(
                format!(
                    "search_limit must be between 1 and {}, got {}",
                    MAX_SEARCH_LIMIT, search_limit
                ),
                "Only the first search hit is used; the default of 10 is usually enough.",
            ));
        }
    }

    if let Some(lookups) = config.max_concurrent_lookups {
        if !(1..=MAX_CONCURRENT_LOOKUPS).contains(&lookups) {
            return Err(invalid(
                format!(
                    "max_concurrent_lookups must be between 1 and {}, got {}",
                    MAX_CONCURRENT_LOOKUPS, lookups
                ),
                "Lower the value to stay within the Black Duck server's rate limits.",
            ));
        }
    }

    if let Some(log_format) = config.log_format.as_deref() {
        log_format
            .parse::<LogFormat>()
            .map_err(|e| invalid(e, "Use 'pretty', 'compact' or 'json'."))?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
///
/// Runs before the tracing subscriber exists, so it writes to stderr directly.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
