use crate::domain::model::ContentDocument;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Path of the content document relative to the site it belongs to.
pub const DEFAULT_CONTENT_PATH: &str = "data.json";

/// Where the content document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    /// Absolute URL of the document itself.
    Url(String),
    /// URL of the site; the document is `data.json` next to it.
    Site(String),
    File(String),
}

pub trait ConfigProvider: Send + Sync {
    fn content_url(&self) -> Option<&str>;
    fn site_url(&self) -> Option<&str>;
    fn content_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn filter_categories(&self) -> &[String];
    fn initial_filter(&self) -> Option<&str>;
    fn animation_delay_ms(&self) -> u64;
    fn placeholder_image(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;

    /// A local file wins over URLs; with nothing configured the document is
    /// `data.json` in the working directory.
    fn content_location(&self) -> ContentLocation {
        if let Some(file) = self.content_file() {
            ContentLocation::File(file.to_string())
        } else if let Some(url) = self.content_url() {
            ContentLocation::Url(url.to_string())
        } else if let Some(site) = self.site_url() {
            ContentLocation::Site(site.to_string())
        } else {
            ContentLocation::File(DEFAULT_CONTENT_PATH.to_string())
        }
    }
}

/// Where the page gets its content from. One call per `load()`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<ContentDocument>;

    fn describe(&self) -> String;
}
