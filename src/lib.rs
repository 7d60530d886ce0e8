pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{file::FileContentSource, http::HttpContentSource, storage::LocalStorage};
pub use config::toml_config::SiteConfig;
pub use crate::core::{
    engine::SiteBuilder,
    interactions::{EventOutcome, UiEvent},
    page::{LoadOutcome, PortfolioPage},
};
pub use domain::model::ContentDocument;
pub use utils::error::{RenderError, Result};
