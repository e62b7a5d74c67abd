mod common;

use common::fixtures::*;
use common::{generate, init_logging, TestResult};
use folio::layout::{BlockKind, LaidOutDocument, PageGeometry};
use folio::traits::InMemoryImageResolver;
use folio::types::Category;
use folio::{ContentModel, DocumentAssembler, DocumentStyle, GeneratorConfig};

fn busy_model() -> ContentModel {
    let mut entries = Vec::new();
    for (i, category) in Category::PRIORITY.iter().enumerate() {
        for j in 0..4 {
            entries.push(detailed_entry(
                &format!("{} {}", category.singular(), j + 1),
                *category,
                &prose(20 + 15 * ((i + j) % 5)),
            ));
        }
    }
    ContentModel::builder()
        .profile(profile("Alex Kim"))
        .entries(entries)
        .academic(academic_record())
        .insight(insight("proudest_achievement", &prose(120)))
        .insight(insight("future_goals", &prose(60)))
        .build()
}

fn assert_no_overflow(layout: &LaidOutDocument) {
    let bottom = layout.geometry.content_bottom();
    for (page, placement) in layout.placements() {
        assert!(!placement.overflow, "{:?} overflowed on page {}", placement.kind, page.number);
        assert!(
            placement.bottom() <= bottom + 0.01,
            "{:?} ends at {} below {} on page {}",
            placement.kind,
            placement.bottom(),
            bottom,
            page.number
        );
        assert!(placement.y >= layout.geometry.top_margin - 0.01);
    }
}

#[tokio::test]
async fn test_no_block_crosses_the_bottom_margin() -> TestResult {
    init_logging();
    let model = busy_model();
    for style in DocumentStyle::ALL {
        let doc = generate(&model, style).await?;
        assert!(doc.page_count > 1);
        assert_no_overflow(&doc.layout);
    }
    Ok(())
}

#[tokio::test]
async fn test_no_page_ends_with_a_section_header() -> TestResult {
    let model = busy_model();
    for style in DocumentStyle::ALL {
        let doc = generate(&model, style).await?;
        for page in &doc.layout.pages {
            let last = page.placements.last().map(|p| p.kind);
            assert_ne!(
                last,
                Some(BlockKind::SectionHeader),
                "{} page {} ends with a header",
                style,
                page.number
            );
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_no_page_starts_with_spacing() -> TestResult {
    let model = busy_model();
    for style in DocumentStyle::ALL {
        let doc = generate(&model, style).await?;
        for page in doc.layout.pages.iter().skip(1) {
            let first = page.placements.first().map(|p| p.kind).unwrap();
            assert!(!first.is_spacing(), "{} page {} starts with {:?}", style, page.number, first);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_identical_inputs_give_identical_documents() -> TestResult {
    let model = busy_model();
    for style in DocumentStyle::ALL {
        let first = generate(&model, style).await?;
        let second = generate(&model, style).await?;
        assert_eq!(first.page_count, second.page_count);
        assert_eq!(first.layout, second.layout);
        assert_eq!(first.bytes, second.bytes);
    }
    Ok(())
}

#[tokio::test]
async fn test_smaller_pages_need_more_pages() -> TestResult {
    let model = busy_model();
    let a4 = generate(&model, DocumentStyle::Professional).await?;

    let config = GeneratorConfig {
        page: PageGeometry {
            height: 500.0,
            ..PageGeometry::a4()
        },
        ..Default::default()
    };
    let small = DocumentAssembler::new(config, InMemoryImageResolver::new())
        .generate(&model, DocumentStyle::Professional)
        .await?;

    assert!(small.page_count > a4.page_count);
    assert_no_overflow(&small.layout);
    Ok(())
}

#[tokio::test]
async fn test_oversized_block_is_placed_alone_and_flagged() -> TestResult {
    init_logging();
    let mut huge = entry("Research journal", Category::Academic);
    huge.description = Some(prose(4000));
    let model = ContentModel::builder()
        .entry(entry("Chess club", Category::Club))
        .entry(huge)
        .build();

    let doc = generate(&model, DocumentStyle::Plain).await?;
    let (page, placement) = doc
        .layout
        .placements()
        .find(|(_, p)| p.overflow)
        .expect("the long entry should overflow");
    assert_eq!(placement.kind, BlockKind::ActivityCard);
    // Only its held section header shares the page.
    assert!(page.placements.len() <= 2);
    assert!(doc.page_count >= 2);
    Ok(())
}
