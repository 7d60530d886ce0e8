use crate::core::{ContentDocument, ContentSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads the content document through a [`Storage`] backend, for builds
/// that have the JSON on disk.
#[derive(Debug, Clone)]
pub struct FileContentSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileContentSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> ContentSource for FileContentSource<S> {
    async fn fetch(&self) -> Result<ContentDocument> {
        let bytes = self.storage.read_file(&self.path).await?;
        tracing::debug!("Read {} bytes of content from {}", bytes.len(), self.path);
        ContentDocument::from_json_slice(&bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path)
    }
}
