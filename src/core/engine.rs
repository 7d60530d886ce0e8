use crate::adapters::file::FileContentSource;
use crate::adapters::http::HttpContentSource;
use crate::adapters::storage::LocalStorage;
use crate::core::page::{LoadOutcome, PortfolioPage};
use crate::core::renderer::RenderOptions;
use crate::core::shell::portfolio_shell;
use crate::core::{ConfigProvider, ContentSource, Storage};
use crate::domain::ports::ContentLocation;
use crate::utils::error::Result;
use std::time::Duration;

/// Builds the static site: loads the content into the default host page,
/// applies the configured filter, waits for the skill bars and writes the
/// HTML through `storage`.
pub struct SiteBuilder<St: Storage, C: ConfigProvider> {
    storage: St,
    config: C,
}

impl<St: Storage, C: ConfigProvider> SiteBuilder<St, C> {
    pub fn new(storage: St, config: C) -> Self {
        Self { storage, config }
    }

    pub async fn run(&self) -> Result<String> {
        let timeout = self.config.request_timeout_seconds().map(Duration::from_secs);

        match self.config.content_location() {
            ContentLocation::Url(url) => {
                self.build_with(HttpContentSource::new(url, timeout)?).await
            }
            ContentLocation::Site(site) => {
                self.build_with(HttpContentSource::for_site(&site, timeout)?)
                    .await
            }
            ContentLocation::File(path) => {
                let source = FileContentSource::new(LocalStorage::new("."), path);
                self.build_with(source).await
            }
        }
    }

    pub async fn build_with<S: ContentSource>(&self, source: S) -> Result<String> {
        tracing::info!("Starting site build...");

        let shell = portfolio_shell(self.config.filter_categories());
        let options = RenderOptions {
            placeholder_image: self.config.placeholder_image().to_string(),
        };
        let delay = Duration::from_millis(self.config.animation_delay_ms());
        let mut page = PortfolioPage::new(source, shell, options, delay)?;

        if let Some(category) = self.config.initial_filter() {
            page.click_filter(category).await?;
        }

        match page.load().await {
            LoadOutcome::Loaded(summary) => {
                tracing::info!(
                    "Loaded content: {} skills, {} projects, {} experience entries",
                    summary.skills,
                    summary.projects,
                    summary.experience
                );
            }
            LoadOutcome::Failed(e) => return Err(e),
        }

        // 等待進度條動畫完成再輸出
        page.settle_animations().await;
        let html = page.to_html().await;

        let filename = self.config.output_filename();
        self.storage.write_file(filename, html.as_bytes()).await?;

        let output_path = format!("{}/{}", self.config.output_path(), filename);
        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }
}
