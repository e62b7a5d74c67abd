//! The three document styles.
//!
//! A style decides which blocks appear, in which order and with which
//! visual parameters. Measuring, page breaks and footers belong to the
//! shared [`LayoutEngine`]; a style only hands it blocks through a
//! [`RenderContext`].

mod application;
mod common;
mod plain;
mod professional;

pub use application::ApplicationStyle;
pub use common::truncate_chars;
pub use plain::PlainStyle;
pub use professional::ProfessionalStyle;

use crate::error::GenerateError;
use crate::model::ContentModel;
use crate::pipeline::GeneratorConfig;
use folio_layout::{
    Color, ContentBlock, EmbeddedImage, FooterSpec, LaidOutDocument, LayoutEngine, LayoutError,
    PageChrome, TextStyle,
};
use folio_traits::ImageResolver;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStyle {
    Plain,
    Professional,
    ApplicationFormat,
}

impl DocumentStyle {
    pub const ALL: [DocumentStyle; 3] = [
        DocumentStyle::Plain,
        DocumentStyle::Professional,
        DocumentStyle::ApplicationFormat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStyle::Plain => "plain",
            DocumentStyle::Professional => "professional",
            DocumentStyle::ApplicationFormat => "application-format",
        }
    }

    /// Appended to the document label in output filenames.
    pub fn filename_suffix(self) -> &'static str {
        match self {
            DocumentStyle::Plain => "",
            DocumentStyle::Professional => "_Professional",
            DocumentStyle::ApplicationFormat => "_Application",
        }
    }
}

impl fmt::Display for DocumentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerateError::Config(format!("Unknown document style '{}'", s)))
    }
}

/// Visual parameters of one style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub heading: TextStyle,
    pub entry_title: TextStyle,
    pub body: TextStyle,
    pub label: TextStyle,
    pub muted: TextStyle,
    pub primary: Color,
    pub accent: Color,
    pub surface: Color,
    pub border: Color,
    pub verified: Color,
    /// Width of the label column in field rows.
    pub label_width: f32,
    pub block_spacing: f32,
    pub footer: FooterSpec,
}

impl StyleSheet {
    pub fn chrome(&self) -> PageChrome {
        PageChrome::new(self.footer.clone(), self.block_spacing)
    }
}

/// What a style renderer works against during one run.
pub struct RenderContext<'a, R> {
    engine: LayoutEngine,
    resolver: &'a R,
    config: &'a GeneratorConfig,
    images_resolved: usize,
}

impl<'a, R: ImageResolver> RenderContext<'a, R> {
    pub fn new(engine: LayoutEngine, resolver: &'a R, config: &'a GeneratorConfig) -> Self {
        Self {
            engine,
            resolver,
            config,
            images_resolved: 0,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn place(&mut self, block: impl Into<ContentBlock>) -> Result<(), LayoutError> {
        self.engine.place(block.into())
    }

    /// Resolves up to `max_images_per_entry` of `urls`, one after another.
    ///
    /// Failed images are left out; the rest keep their order.
    pub async fn resolve_images(&mut self, urls: &[String]) -> Vec<EmbeddedImage> {
        let limit = self.config.resolver.max_images_per_entry;
        if urls.len() > limit {
            log::debug!("Using the first {} of {} image URLs", limit, urls.len());
        }

        let mut images = Vec::new();
        for url in urls.iter().map(|u| u.trim()).filter(|u| !u.is_empty()).take(limit) {
            if let Some(image) = self.resolver.resolve(url).await {
                self.images_resolved += 1;
                images.push(EmbeddedImage {
                    key: format!("img{}", self.images_resolved),
                    image,
                });
            }
        }
        images
    }

    pub fn finish(self) -> LaidOutDocument {
        self.engine.finish()
    }
}

/// A document style: which blocks to emit for a model, and how they look.
pub trait StyleRenderer {
    fn stylesheet(&self) -> &StyleSheet;

    fn render<R: ImageResolver>(
        &self,
        model: &ContentModel,
        ctx: &mut RenderContext<'_, R>,
    ) -> impl Future<Output = Result<(), LayoutError>>;
}

impl DocumentStyle {
    /// Runs this style's renderer over `model` and returns the laid-out pages.
    pub(crate) async fn lay_out<R: ImageResolver>(
        self,
        model: &ContentModel,
        resolver: &R,
        config: &GeneratorConfig,
    ) -> Result<LaidOutDocument, LayoutError> {
        match self {
            DocumentStyle::Plain => run(&PlainStyle::new(config), model, resolver, config).await,
            DocumentStyle::Professional => {
                run(&ProfessionalStyle::new(config, model), model, resolver, config).await
            }
            DocumentStyle::ApplicationFormat => {
                run(&ApplicationStyle::new(config), model, resolver, config).await
            }
        }
    }
}

async fn run<S: StyleRenderer, R: ImageResolver>(
    style: &S,
    model: &ContentModel,
    resolver: &R,
    config: &GeneratorConfig,
) -> Result<LaidOutDocument, LayoutError> {
    let engine = LayoutEngine::new(config.page, style.stylesheet().chrome())?;
    let mut ctx = RenderContext::new(engine, resolver, config);
    style.render(model, &mut ctx).await?;
    Ok(ctx.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names_round_trip() {
        for style in DocumentStyle::ALL {
            assert_eq!(style.as_str().parse::<DocumentStyle>().unwrap(), style);
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style));
        }
        assert_eq!(" Professional ".parse::<DocumentStyle>().unwrap(), DocumentStyle::Professional);
        assert!("fancy".parse::<DocumentStyle>().is_err());
    }
}
