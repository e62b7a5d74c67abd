pub mod resolver;

pub use resolver::{
    ImageResolver, InMemoryImageResolver, ResolveError, ResolvedImage, DEFAULT_MAX_PIXEL_DIMENSION,
};
