use std::time::Duration;

use async_trait::async_trait;

use super::{parse_slides, ProviderError, SlideProvider};
use crate::carousel::Slide;

/// Fetches the slide list from the storefront's banner endpoint.
#[derive(Debug, Clone)]
pub struct HttpSlideProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpSlideProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SlideProvider for HttpSlideProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<Slide>, ProviderError> {
        let request_error = |source| ProviderError::Request {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        let slides = parse_slides(&body)?;
        tracing::debug!(url = %self.url, slides = slides.len(), "banners fetched");
        Ok(slides)
    }
}
