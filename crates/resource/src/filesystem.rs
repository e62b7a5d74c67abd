//! Filesystem-based image resolver for native platforms.
//!
//! This resolver loads images from the local filesystem with security
//! measures to prevent path traversal attacks.
//!
//! # Security
//!
//! The resolver validates that all resolved paths remain within the base path
//! to prevent directory traversal attacks (e.g., `../../../etc/passwd`).

use crate::config::ResolverConfig;
use folio_traits::{ImageResolver, ResolveError, ResolvedImage};
use std::future::Future;
use std::path::{Component, Path, PathBuf};

/// A resolver that loads images relative to a base directory.
///
/// Accepts plain relative paths and `file://` locations. Absolute paths and
/// anything that would escape the base directory are reported as not found.
#[derive(Debug, Clone)]
pub struct FilesystemImageResolver {
    base_path: PathBuf,
    /// Canonicalized base path for security checks
    canonical_base: Option<PathBuf>,
    config: ResolverConfig,
}

impl FilesystemImageResolver {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self::with_config(base_path, ResolverConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(base_path: P, config: ResolverConfig) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the path doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
            config,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves and validates a location relative to the base path.
    ///
    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, location: &str) -> Option<PathBuf> {
        let relative = location.strip_prefix("file://").unwrap_or(location);
        if relative.is_empty() || Path::new(relative).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(relative);

        if let (Ok(canonical), Some(base)) = (full_path.canonicalize(), &self.canonical_base) {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Canonicalization failed (file missing): fall back to a component check
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }

    pub fn exists(&self, location: &str) -> bool {
        self.resolve_path_safe(location)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    async fn load(&self, location: &str) -> Result<ResolvedImage, ResolveError> {
        let full_path = self.resolve_path_safe(location).ok_or_else(|| {
            ResolveError::NotFound(format!("{} (outside base directory)", location))
        })?;

        let bytes = tokio::fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResolveError::NotFound(location.to_string())
            } else {
                ResolveError::LoadFailed {
                    url: location.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        if bytes.len() > self.config.max_bytes {
            return Err(ResolveError::TooLarge {
                url: location.to_string(),
                bytes: bytes.len(),
                limit: self.config.max_bytes,
            });
        }

        ResolvedImage::decode(location, &bytes, self.config.max_pixel_dimension)
    }
}

impl ImageResolver for FilesystemImageResolver {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        self.load(url)
    }

    fn name(&self) -> &'static str {
        "FilesystemImageResolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path) {
        RgbImage::from_pixel(6, 3, Rgb([0, 128, 255]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[tokio::test]
    async fn test_loads_existing_image() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("photo.png"));

        let resolver = FilesystemImageResolver::new(dir.path());
        let image = resolver.fetch("photo.png").await.unwrap();
        assert_eq!((image.width, image.height), (6, 3));

        let via_scheme = resolver.resolve("file://photo.png").await;
        assert!(via_scheme.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let resolver = FilesystemImageResolver::new(dir.path());
        let result = resolver.fetch("nonexistent.png").await;
        assert!(matches!(result, Err(ResolveError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_non_image_file_fails_decode() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.png"), b"plain text").unwrap();
        let resolver = FilesystemImageResolver::new(dir.path());
        let result = resolver.fetch("notes.png").await;
        assert!(matches!(result, Err(ResolveError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("photo.png"));
        let config = ResolverConfig {
            max_bytes: 8,
            ..Default::default()
        };
        let resolver = FilesystemImageResolver::with_config(dir.path(), config);
        let result = resolver.fetch("photo.png").await;
        assert!(matches!(result, Err(ResolveError::TooLarge { .. })));
    }

    // Security tests for path traversal prevention

    #[test]
    fn test_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let resolver = FilesystemImageResolver::new(dir.path());

        assert!(!resolver.exists("../../../etc/passwd"));
        assert!(!resolver.exists(".."));
        assert!(!resolver.exists("foo/../../../bar"));
        assert!(!resolver.exists("./../../secret"));
    }

    #[test]
    fn test_blocks_absolute_paths() {
        let dir = tempdir().unwrap();
        let resolver = FilesystemImageResolver::new(dir.path());
        assert!(!resolver.exists("/etc/passwd"));
        assert!(!resolver.exists("file:///etc/passwd"));
    }

    #[tokio::test]
    async fn test_allows_nested_paths() {
        let dir = tempdir().unwrap();
        let nested_dir = dir.path().join("entries");
        fs::create_dir(&nested_dir).unwrap();
        write_png(&nested_dir.join("nested.png"));

        let resolver = FilesystemImageResolver::new(dir.path());
        assert!(resolver.exists("entries/nested.png"));
        assert!(resolver.resolve("entries/nested.png").await.is_some());
    }
}
