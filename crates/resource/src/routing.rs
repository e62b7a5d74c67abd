use crate::config::ResolverConfig;
use crate::filesystem::FilesystemImageResolver;
use crate::http::{is_http_url, HttpImageResolver};
use folio_traits::{ImageResolver, ResolveError, ResolvedImage};
use std::future::Future;
use std::path::Path;

/// Dispatches each location by scheme: `http(s)://` to the HTTP resolver,
/// everything else to the filesystem resolver when one is configured.
#[derive(Debug, Clone)]
pub struct RoutingImageResolver {
    http: HttpImageResolver,
    files: Option<FilesystemImageResolver>,
}

impl RoutingImageResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            http: HttpImageResolver::new(config),
            files: None,
        }
    }

    /// Also serve relative and `file://` locations from `base_path`.
    pub fn with_local_root<P: AsRef<Path>>(mut self, base_path: P) -> Self {
        let config = *self.http.config();
        self.files = Some(FilesystemImageResolver::with_config(base_path, config));
        self
    }
}

impl Default for RoutingImageResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl ImageResolver for RoutingImageResolver {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        async move {
            if is_http_url(url) {
                return self.http.fetch(url).await;
            }
            match &self.files {
                Some(files) => files.fetch(url).await,
                None => Err(ResolveError::UnsupportedScheme(url.to_string())),
            }
        }
    }

    fn name(&self) -> &'static str {
        "RoutingImageResolver"
    }
}
