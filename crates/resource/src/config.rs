use folio_traits::DEFAULT_MAX_PIXEL_DIMENSION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits applied to every image fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Upper bound for one fetch, connect through body. A fetch that runs
    /// longer resolves to no image.
    ///
    /// Defaults to `8000`.
    pub timeout_ms: u64,
    /// Responses larger than this are rejected without decoding.
    ///
    /// Defaults to 10 MiB.
    pub max_bytes: usize,
    /// Decoded images are downscaled so neither side exceeds this many pixels.
    ///
    /// Defaults to `800`.
    pub max_pixel_dimension: u32,
    /// Images shown per achievement entry; later URLs are never fetched.
    ///
    /// Defaults to `3`.
    pub max_images_per_entry: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 8_000,
            max_bytes: 10 * 1024 * 1024,
            max_pixel_dimension: DEFAULT_MAX_PIXEL_DIMENSION,
            max_images_per_entry: 3,
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
