use crate::config::{
    default_filter_categories, validate_provider, DEFAULT_ANIMATION_DELAY_MS,
    DEFAULT_OUTPUT_FILENAME,
};
use crate::core::renderer::DEFAULT_PLACEHOLDER_IMAGE;
use crate::core::ConfigProvider;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site build configuration read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub site_url: Option<String>,
    pub file: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_filter_categories")]
    pub filter_categories: Vec<String>,
    pub initial_filter: Option<String>,
    #[serde(default = "default_animation_delay_ms")]
    pub animation_delay_ms: u64,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filter_categories: default_filter_categories(),
            initial_filter: None,
            animation_delay_ms: DEFAULT_ANIMATION_DELAY_MS,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

fn default_animation_delay_ms() -> u64 {
    DEFAULT_ANIMATION_DELAY_MS
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| RenderError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTENT_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RenderError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overrides the initial filter, e.g. from the command line.
    pub fn with_initial_filter(mut self, filter: Option<String>) -> Self {
        if filter.is_some() {
            self.render.initial_filter = filter;
        }
        self
    }
}

impl ConfigProvider for SiteConfig {
    fn content_url(&self) -> Option<&str> {
        self.source.url.as_deref()
    }

    fn site_url(&self) -> Option<&str> {
        self.source.site_url.as_deref()
    }

    fn content_file(&self) -> Option<&str> {
        self.source.file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        &self.output.filename
    }

    fn filter_categories(&self) -> &[String] {
        &self.render.filter_categories
    }

    fn initial_filter(&self) -> Option<&str> {
        self.render.initial_filter.as_deref()
    }

    fn animation_delay_ms(&self) -> u64 {
        self.render.animation_delay_ms
    }

    fn placeholder_image(&self) -> &str {
        &self.render.placeholder_image
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
