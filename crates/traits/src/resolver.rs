//! ImageResolver trait for abstracting image fetching.
//!
//! Style renderers that display images ask a resolver for each URL in
//! document order and await the answer before placing the next block.
//! A resolver never fails a generation run: [`ImageResolver::resolve`]
//! folds every error into `None` so the caller drops that one image.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::future::Future;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Images larger than this (in pixels, either side) are downscaled on decode.
pub const DEFAULT_MAX_PIXEL_DIMENSION: u32 = 800;

/// Error type for image fetch and decode operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Request for '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request for '{url}' timed out after {millis}ms")]
    Timeout { url: String, millis: u64 },

    #[error("Image '{url}' is {bytes} bytes, over the {limit} byte limit")]
    TooLarge { url: String, bytes: usize, limit: usize },

    #[error("Failed to decode image '{url}': {message}")]
    Decode { url: String, message: String },

    #[error("Failed to load image '{url}': {message}")]
    LoadFailed { url: String, message: String },

    #[error("Unsupported image location: {0}")]
    UnsupportedScheme(String),
}

/// A decoded, embeddable image: 8-bit RGB pixels, row-major.
#[derive(Clone, PartialEq)]
pub struct ResolvedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Arc<Vec<u8>>,
}

impl Debug for ResolvedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgb_len", &self.rgb.len())
            .finish()
    }
}

impl ResolvedImage {
    /// Decodes PNG/JPEG/GIF bytes, downscaling so neither side exceeds `max_dimension`.
    pub fn decode(url: &str, bytes: &[u8], max_dimension: u32) -> Result<Self, ResolveError> {
        let decode_err = |message: String| ResolveError::Decode {
            url: url.to_string(),
            message,
        };

        let mut decoded = image::load_from_memory(bytes).map_err(|e| decode_err(e.to_string()))?;
        let max_dimension = max_dimension.max(1);
        if decoded.width() > max_dimension || decoded.height() > max_dimension {
            decoded = decoded.thumbnail(max_dimension, max_dimension);
        }

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(decode_err("image has no pixels".to_string()));
        }

        Ok(Self {
            width,
            height,
            rgb: Arc::new(rgb.into_raw()),
        })
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// A trait for fetching images from various sources.
///
/// # Implementations
///
/// - `InMemoryImageResolver`: pre-populated encoded images (always available)
/// - `HttpImageResolver`, `FilesystemImageResolver`, `RoutingImageResolver`
///   in the `folio-resource` crate
pub trait ImageResolver: Send + Sync + Debug {
    /// Fetch and decode the image at `url`, reporting why it failed.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send;

    /// Fetch the image at `url`, or `None` on any failure.
    ///
    /// Failures are logged and never propagated.
    fn resolve(&self, url: &str) -> impl Future<Output = Option<ResolvedImage>> + Send {
        async move {
            match self.fetch(url).await {
                Ok(image) => Some(image),
                Err(err) => {
                    log::warn!("Dropping image '{}' ({}): {}", url, self.name(), err);
                    None
                }
            }
        }
    }

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<R: ImageResolver> ImageResolver for Arc<R> {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        self.as_ref().fetch(url)
    }

    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
}

/// An in-memory image resolver.
///
/// Encoded images are stored under their URL and decoded on every fetch.
/// Works in any environment and is what tests and prefetching callers use.
#[derive(Debug)]
pub struct InMemoryImageResolver {
    images: RwLock<HashMap<String, Arc<Vec<u8>>>>,
    max_dimension: u32,
}

impl Default for InMemoryImageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryImageResolver {
    pub fn new() -> Self {
        Self {
            images: RwLock::new(HashMap::new()),
            max_dimension: DEFAULT_MAX_PIXEL_DIMENSION,
        }
    }

    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Store encoded image bytes under `url`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, url: impl Into<String>, bytes: Vec<u8>) -> Result<(), ResolveError> {
        let url = url.into();
        let mut images = self.images.write().map_err(|_| ResolveError::LoadFailed {
            url: url.clone(),
            message: "image store lock poisoned".to_string(),
        })?;
        images.insert(url, Arc::new(bytes));
        Ok(())
    }

    /// Remove an image from the store.
    ///
    /// Returns `None` if the lock is poisoned or the image doesn't exist.
    pub fn remove(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.images.write().ok()?.remove(url)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.images.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.images.read().map(|r| r.is_empty()).unwrap_or(true)
    }

    fn load(&self, url: &str) -> Result<ResolvedImage, ResolveError> {
        let bytes = {
            let images = self.images.read().map_err(|_| ResolveError::LoadFailed {
                url: url.to_string(),
                message: "image store lock poisoned".to_string(),
            })?;
            images
                .get(url)
                .cloned()
                .ok_or_else(|| ResolveError::NotFound(url.to_string()))?
        };
        ResolvedImage::decode(url, &bytes, self.max_dimension)
    }
}

impl ImageResolver for InMemoryImageResolver {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        let result = self.load(url);
        async move { result }
    }

    fn name(&self) -> &'static str {
        "InMemoryImageResolver"
    }
}
