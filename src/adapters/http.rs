use crate::core::{ContentDocument, ContentSource};
use crate::domain::ports::DEFAULT_CONTENT_PATH;
use crate::utils::error::{RenderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches the content document with a single GET.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    url: String,
}

impl HttpContentSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        // 預設不設逾時
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    /// `data.json` next to the page at `site_url`.
    pub fn for_site(site_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(site_url).map_err(|e| RenderError::InvalidConfigValue {
            field: "site_url".to_string(),
            value: site_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let url = base
            .join(DEFAULT_CONTENT_PATH)
            .map_err(|e| RenderError::Config {
                message: format!("Cannot resolve {} against {}: {}", DEFAULT_CONTENT_PATH, site_url, e),
            })?;
        Self::new(url.to_string(), timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<ContentDocument> {
        tracing::debug!("Making content request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Content response status: {}", status);
        if !status.is_success() {
            return Err(RenderError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // 先取原始內容，讓格式錯誤歸類為 Parse 而非 Http
        let body = response.bytes().await?;
        ContentDocument::from_json_slice(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
