pub mod toml_config;

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{
    validate_categories, validate_path, validate_range, validate_required, validate_url,
};

pub const DEFAULT_OUTPUT_FILENAME: &str = "index.html";
pub const DEFAULT_ANIMATION_DELAY_MS: u64 = 500;
pub const MAX_ANIMATION_DELAY_MS: u64 = 60_000;

pub fn default_filter_categories() -> Vec<String> {
    ["all", "web", "mobile", "design"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    if config.content_url().is_some() && config.content_file().is_some() {
        return Err(RenderError::Config {
            message: "content URL and content file are mutually exclusive".to_string(),
        });
    }
    if let Some(url) = config.content_url() {
        validate_url("content_url", url)?;
    }
    if let Some(url) = config.site_url() {
        validate_url("site_url", url)?;
    }
    if let Some(file) = config.content_file() {
        validate_path("content_file", file)?;
    }

    validate_required("output_path", config.output_path())?;
    validate_path("output_path", config.output_path())?;
    validate_required("output_filename", config.output_filename())?;
    validate_categories("filter_categories", config.filter_categories())?;
    validate_range(
        "animation_delay_ms",
        config.animation_delay_ms(),
        0,
        MAX_ANIMATION_DELAY_MS,
    )?;

    if let Some(filter) = config.initial_filter() {
        if !config.filter_categories().iter().any(|c| c == filter) {
            return Err(RenderError::InvalidConfigValue {
                field: "initial_filter".to_string(),
                value: filter.to_string(),
                reason: format!(
                    "Not one of the filter categories: {}",
                    config.filter_categories().join(", ")
                ),
            });
        }
    }

    if let Some(timeout) = config.request_timeout_seconds() {
        validate_range("request_timeout_seconds", timeout, 1, 600)?;
    }

    Ok(())
}
