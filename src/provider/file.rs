use std::path::PathBuf;

use async_trait::async_trait;

use super::{parse_slides, ProviderError, SlideProvider};
use crate::carousel::Slide;

/// Reads the slide list from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSlideProvider {
    path: PathBuf,
}

impl FileSlideProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SlideProvider for FileSlideProvider {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<Slide>, ProviderError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ProviderError::Read {
                path: self.path.clone(),
                source,
            })?;
        parse_slides(&body)
    }
}
