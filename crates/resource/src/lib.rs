//! Image resolvers for the folio document pipeline.
//!
//! This crate provides platform-specific implementations of the
//! `ImageResolver` trait from folio-traits.
//!
//! ## Available Resolvers
//!
//! - [`HttpImageResolver`]: Fetches `http://` and `https://` URLs with a per-request timeout
//! - [`FilesystemImageResolver`]: Loads images from the local filesystem
//! - [`RoutingImageResolver`]: Dispatches by URL scheme to one of the above
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory resolver from folio-traits:
//! - [`InMemoryImageResolver`]: Pre-populated in-memory storage

mod config;
mod filesystem;
mod http;
mod routing;

pub use config::ResolverConfig;
pub use filesystem::FilesystemImageResolver;
pub use http::HttpImageResolver;
pub use routing::RoutingImageResolver;

// Re-export the in-memory resolver from folio-traits for convenience
pub use folio_traits::InMemoryImageResolver;
