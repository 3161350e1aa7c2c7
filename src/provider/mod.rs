//! Slide list providers.
//!
//! A provider is asked once per session for the ordered banner list. A
//! failed fetch leaves the carousels in their placeholder state until the
//! caller retries.

mod error;
mod file;
mod http;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::carousel::Slide;
use crate::config::{SourceConfig, SourceKind};

pub use error::ProviderError;
pub use file::FileSlideProvider;
pub use http::HttpSlideProvider;

/// Source of the ordered slide list.
#[async_trait]
pub trait SlideProvider: Send + Sync {
    /// Name of this provider for logging.
    fn name(&self) -> &'static str;

    /// Fetch the full, ordered slide list.
    async fn fetch(&self) -> Result<Vec<Slide>, ProviderError>;
}

/// Fixed in-memory slide list.
#[derive(Debug, Clone, Default)]
pub struct StaticSlideProvider {
    slides: Vec<Slide>,
}

impl StaticSlideProvider {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }
}

#[async_trait]
impl SlideProvider for StaticSlideProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Slide>, ProviderError> {
        Ok(self.slides.clone())
    }
}

/// Build the provider selected by `[source]`.
pub fn provider_from_config(
    source: &SourceConfig,
) -> Result<Arc<dyn SlideProvider>, ProviderError> {
    match source.kind {
        SourceKind::Inline => Ok(Arc::new(StaticSlideProvider::new(source.slides.clone()))),
        SourceKind::File => {
            let path = source.path.clone().ok_or_else(|| {
                ProviderError::Misconfigured("file source without a path".to_string())
            })?;
            Ok(Arc::new(FileSlideProvider::new(path)))
        }
        SourceKind::Http => {
            let url = source.url.clone().ok_or_else(|| {
                ProviderError::Misconfigured("http source without a url".to_string())
            })?;
            let timeout = Duration::from_secs(u64::from(source.timeout_seconds));
            Ok(Arc::new(HttpSlideProvider::new(url, timeout)?))
        }
    }
}

/// Parse a slide list body.
///
/// Accepts a bare JSON array or the storefront's `{ "data": [...] }`
/// envelope.
pub fn parse_slides(body: &[u8]) -> Result<Vec<Slide>, ProviderError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Body {
        List(Vec<Slide>),
        Envelope { data: Vec<Slide> },
    }

    let slides = match serde_json::from_slice::<Body>(body) {
        Ok(Body::List(slides)) | Ok(Body::Envelope { data: slides }) => slides,
        // Untagged errors are opaque; re-parse as a list for a useful message.
        Err(_) => serde_json::from_slice::<Vec<Slide>>(body)?,
    };
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let slides = parse_slides(br#"[{"id": 1, "imageUrl": "a.png"}]"#).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].id, "1");
    }

    #[test]
    fn parses_data_envelope() {
        let body = br#"{"data": [{"id": "x", "image": "x.png", "link": "/x"}], "total": 1}"#;
        let slides = parse_slides(body).unwrap();
        assert_eq!(slides[0].link_target.as_deref(), Some("/x"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_slides(b"{\"nope\": true}"),
            Err(ProviderError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn static_provider_returns_slides() {
        let provider = StaticSlideProvider::new(vec![Slide::new("a", "a.png")]);
        assert_eq!(provider.fetch().await.unwrap().len(), 1);
    }
}
