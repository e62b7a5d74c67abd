//! HTTP(S) image resolver.

use crate::config::ResolverConfig;
use folio_traits::{ImageResolver, ResolveError, ResolvedImage};
use std::future::Future;

/// Check if the location string looks like an HTTP(S) URL.
pub(crate) fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetches images over HTTP(S).
///
/// Every fetch is bounded by [`ResolverConfig::timeout_ms`] (enforced both by
/// the client and by an outer `tokio` timeout, so a stalled body cannot hang
/// the run) and by [`ResolverConfig::max_bytes`].
#[derive(Debug, Clone)]
pub struct HttpImageResolver {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl HttpImageResolver {
    pub fn new(config: ResolverConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        let load_failed = |e: reqwest::Error| {
            if e.is_timeout() {
                ResolveError::Timeout {
                    url: url.to_string(),
                    millis: self.config.timeout_ms,
                }
            } else {
                ResolveError::LoadFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(load_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            if length as usize > self.config.max_bytes {
                return Err(ResolveError::TooLarge {
                    url: url.to_string(),
                    bytes: length as usize,
                    limit: self.config.max_bytes,
                });
            }
        }

        let bytes = response.bytes().await.map_err(load_failed)?;
        if bytes.len() > self.config.max_bytes {
            return Err(ResolveError::TooLarge {
                url: url.to_string(),
                bytes: bytes.len(),
                limit: self.config.max_bytes,
            });
        }
        Ok(bytes.to_vec())
    }
}

impl Default for HttpImageResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl ImageResolver for HttpImageResolver {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        async move {
            if !is_http_url(url) {
                return Err(ResolveError::UnsupportedScheme(url.to_string()));
            }

            log::debug!("Fetching image: {}", url);
            let bytes = tokio::time::timeout(self.config.timeout(), self.download(url))
                .await
                .map_err(|_| ResolveError::Timeout {
                    url: url.to_string(),
                    millis: self.config.timeout_ms,
                })??;

            ResolvedImage::decode(url, &bytes, self.config.max_pixel_dimension)
        }
    }

    fn name(&self) -> &'static str {
        "HttpImageResolver"
    }
}
