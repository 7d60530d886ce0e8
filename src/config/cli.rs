use crate::config::{
    default_filter_categories, validate_provider, DEFAULT_ANIMATION_DELAY_MS,
    DEFAULT_OUTPUT_FILENAME,
};
use crate::core::renderer::DEFAULT_PLACEHOLDER_IMAGE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-render")]
#[command(about = "Render a portfolio page from a JSON content document")]
pub struct CliConfig {
    /// Absolute URL of the content document
    #[arg(long, conflicts_with = "content_file")]
    pub content_url: Option<String>,

    /// URL of the published site; content is fetched from data.json next to it
    #[arg(long)]
    pub site_url: Option<String>,

    /// Local content document (defaults to ./data.json when no URL is given)
    #[arg(long)]
    pub content_file: Option<String>,

    /// TOML configuration file; replaces the options below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: String,

    #[arg(long, value_delimiter = ',', default_values_t = default_filter_categories())]
    pub filter_categories: Vec<String>,

    /// Category selected before the page is written
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long, default_value_t = DEFAULT_ANIMATION_DELAY_MS)]
    pub animation_delay_ms: u64,

    #[arg(long, default_value = DEFAULT_PLACEHOLDER_IMAGE)]
    pub placeholder_image: String,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn content_url(&self) -> Option<&str> {
        self.content_url.as_deref()
    }

    fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    fn content_file(&self) -> Option<&str> {
        self.content_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn filter_categories(&self) -> &[String] {
        &self.filter_categories
    }

    fn initial_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    fn animation_delay_ms(&self) -> u64 {
        self.animation_delay_ms
    }

    fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
