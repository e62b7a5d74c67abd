//! Layout engine micro-benchmarks
//!
//! Measures text measurement, pagination and full document generation for
//! content models of increasing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio::layout::{FontSpec, TextMeasurer};
use folio::traits::InMemoryImageResolver;
use folio::types::{AchievementEntry, Category, InsightAnswer, ProfileSummary, Verification};
use folio::{ContentModel, DocumentAssembler, DocumentStyle, GeneratorConfig, OutputFormat};
use std::hint::black_box;
use tokio::runtime::Runtime;

const PROSE: &str = "Coordinated weekly tutoring sessions for middle school students, \
    recruited volunteers from three clubs and tracked reading progress over the semester.";

fn content_model(entry_count: usize) -> ContentModel {
    let entries = (0..entry_count).map(|i| {
        let category = Category::PRIORITY[i % Category::PRIORITY.len()];
        let mut entry = AchievementEntry::new(format!("{} {}", category.singular(), i + 1), category);
        entry.description = Some(PROSE.repeat(1 + i % 3));
        entry.role = Some("Coordinator".to_string());
        entry.hours = Some(10.0 + i as f32);
        entry.school_year = Some(format!("{}-{}", 2020 + i % 4, 2021 + i % 4));
        if i % 2 == 0 {
            entry.verification = Verification::Verified;
        }
        entry
    });
    ContentModel::builder()
        .profile(ProfileSummary {
            name: Some("Benchmark Student".to_string()),
            school: Some("Central High".to_string()),
            grade_level: Some(12),
        })
        .entries(entries)
        .insight(InsightAnswer::new("future_goals", PROSE))
        .build()
}

fn benchmark_text_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_measurement");
    let measurer = TextMeasurer::new();
    let font = FontSpec::helvetica(10.0);

    for repeats in [1, 10, 100] {
        let text = PROSE.repeat(repeats);
        group.bench_with_input(BenchmarkId::new("paragraphs", repeats), &text, |b, text| {
            b.iter(|| measurer.measure(black_box(text), 480.0, &font));
        });
    }

    group.finish();
}

fn benchmark_layout_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_styles");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let config = GeneratorConfig {
        output: OutputFormat::Text,
        ..Default::default()
    };
    let assembler = DocumentAssembler::new(config, InMemoryImageResolver::new());

    for entry_count in [10, 50, 200] {
        let model = content_model(entry_count);
        for style in DocumentStyle::ALL {
            group.bench_with_input(
                BenchmarkId::new(style.as_str(), entry_count),
                &model,
                |b, model| {
                    b.iter(|| {
                        rt.block_on(assembler.generate(model, style))
                            .expect("Failed to generate document")
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_pdf_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_generation");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let assembler = DocumentAssembler::new(GeneratorConfig::default(), InMemoryImageResolver::new());

    for entry_count in [10, 100] {
        let model = content_model(entry_count);
        group.bench_with_input(BenchmarkId::new("entries", entry_count), &model, |b, model| {
            b.iter(|| {
                rt.block_on(assembler.generate(model, DocumentStyle::Professional))
                    .expect("Failed to generate PDF")
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_text_measurement,
    benchmark_layout_styles,
    benchmark_pdf_generation
);
criterion_main!(benches);
