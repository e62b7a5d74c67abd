//! Monospaced, text-only layout listing everything in full.

use super::common::{
    academic_fields, college_list, course_list, entry_facts, field_row, format_hours, paragraph,
    profile_fields,
};
use super::{RenderContext, StyleRenderer, StyleSheet};
use crate::model::ContentModel;
use crate::pipeline::GeneratorConfig;
use folio_layout::{
    ActivityCard, CardChrome, Color, Divider, DividerStyle, FontSpec, FooterSpec, LayoutError,
    SectionHeader, StyledText, TextStyle,
};
use folio_traits::ImageResolver;
use folio_types::AchievementEntry;

const INK: Color = Color::BLACK;

pub struct PlainStyle {
    sheet: StyleSheet,
    label: String,
}

impl PlainStyle {
    pub fn new(config: &GeneratorConfig) -> Self {
        let body = TextStyle::new(FontSpec::courier(9.5).with_line_height(1.35), INK);
        let bold = TextStyle::new(FontSpec::courier(9.5).bold().with_line_height(1.35), INK);
        let sheet = StyleSheet {
            title: TextStyle::new(FontSpec::courier(14.0).bold(), INK),
            subtitle: body,
            heading: TextStyle::new(FontSpec::courier(11.0).bold(), INK),
            entry_title: bold,
            body,
            label: bold,
            muted: body,
            primary: INK,
            accent: INK,
            surface: Color::WHITE,
            border: INK,
            verified: INK,
            label_width: 120.0,
            block_spacing: 4.0,
            footer: FooterSpec::new(TextStyle::new(FontSpec::courier(8.0), INK)),
        };
        Self {
            sheet,
            label: config.document_label.to_uppercase(),
        }
    }

    fn heading(&self, title: &str) -> SectionHeader {
        SectionHeader {
            ascii_rule: Some('-'),
            padding: 2.0,
            ..SectionHeader::new(StyledText::new(title.to_uppercase(), self.sheet.heading))
        }
    }

    fn divider(&self, ch: char) -> Divider {
        Divider {
            style: DividerStyle::Ascii {
                ch,
                style: self.sheet.body,
            },
            margin: 2.0,
        }
    }

    fn entry_card(&self, entry: &AchievementEntry) -> ActivityCard {
        let sheet = &self.sheet;
        let mut title = format!("* {}", entry.title);
        if entry.is_verified() {
            title.push_str(" [Verified]");
        }

        let mut meta: Vec<StyledText> = entry_facts(entry)
            .into_iter()
            .map(|fact| StyledText::new(format!("  {}", fact), sheet.body))
            .collect();
        if let Some(year) = entry.school_year() {
            meta.push(StyledText::new(format!("  School year: {}", year), sheet.body));
        }
        meta.push(StyledText::new(
            format!("  Status: {}", entry.verification.label()),
            sheet.body,
        ));

        let body = [
            entry.description().map(str::to_string),
            entry.impact().map(|impact| format!("Impact: {}", impact)),
        ]
        .into_iter()
        .flatten()
        .map(|text| StyledText::new(text, sheet.body))
        .collect();

        ActivityCard {
            title: StyledText::new(title, sheet.entry_title),
            meta,
            body,
            verified: entry.is_verified(),
            images: Vec::new(),
            chrome: CardChrome {
                padding: 0.0,
                gap: 2.0,
                ..CardChrome::default()
            },
        }
    }

    fn render_academics<R: ImageResolver>(
        &self,
        model: &ContentModel,
        ctx: &mut RenderContext<'_, R>,
    ) -> Result<(), LayoutError> {
        let Some(record) = model.academic.as_ref().filter(|r| !r.is_empty()) else {
            return Ok(());
        };
        ctx.place(self.heading("Academic Record"))?;
        for (label, value) in academic_fields(record) {
            ctx.place(field_row(&self.sheet, &format!("{}:", label), value))?;
        }
        if let Some(courses) = course_list(record) {
            ctx.place(field_row(&self.sheet, "Courses:", courses))?;
        }
        if let Some(colleges) = college_list(record) {
            ctx.place(field_row(&self.sheet, "Target Colleges:", colleges))?;
        }
        Ok(())
    }
}

impl StyleRenderer for PlainStyle {
    fn stylesheet(&self) -> &StyleSheet {
        &self.sheet
    }

    async fn render<R: ImageResolver>(
        &self,
        model: &ContentModel,
        ctx: &mut RenderContext<'_, R>,
    ) -> Result<(), LayoutError> {
        let sheet = &self.sheet;
        ctx.place(paragraph(format!("STUDENT {}", self.label), sheet.title))?;
        ctx.place(self.divider('='))?;
        for (label, value) in profile_fields(&model.profile) {
            ctx.place(field_row(sheet, &format!("{}:", label), value))?;
        }
        ctx.place(self.divider('='))?;

        self.render_academics(model, ctx)?;

        for (category, entries) in model.by_priority() {
            ctx.place(self.heading(&format!("{} ({})", category.label(), entries.len())))?;
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    ctx.place(self.divider('.'))?;
                }
                ctx.place(self.entry_card(entry))?;
            }
        }

        if !model.insights.is_empty() {
            ctx.place(self.heading("Insights"))?;
            for insight in &model.insights {
                ctx.place(ActivityCard {
                    title: StyledText::new(format!("Q: {}", insight.prompt), sheet.entry_title),
                    meta: Vec::new(),
                    body: vec![StyledText::new(insight.answer.clone(), sheet.body)],
                    verified: false,
                    images: Vec::new(),
                    chrome: CardChrome {
                        padding: 0.0,
                        gap: 2.0,
                        ..CardChrome::default()
                    },
                })?;
            }
        }

        let stats = &model.stats;
        ctx.place(self.heading("Summary"))?;
        ctx.place(field_row(sheet, "Total Activities:", stats.total_entries.to_string()))?;
        ctx.place(field_row(sheet, "Verified:", stats.verified.to_string()))?;
        ctx.place(field_row(sheet, "Total Hours:", format_hours(stats.total_hours)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::DocumentStyle;
    use folio_layout::{BlockKind, LaidOutDocument};
    use folio_traits::InMemoryImageResolver;
    use folio_types::{Category, ProfileSummary, Verification};

    async fn lay_out(model: &ContentModel) -> LaidOutDocument {
        let config = GeneratorConfig::default();
        DocumentStyle::Plain
            .lay_out(model, &InMemoryImageResolver::new(), &config)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_model_has_header_and_summary() {
        let model = ContentModel::builder()
            .profile(ProfileSummary {
                name: Some("Sam Lee".into()),
                school: None,
                grade_level: Some(10),
            })
            .build();
        let doc = lay_out(&model).await;

        assert_eq!(doc.page_count(), 1);
        assert!(doc.contains_text("STUDENT PORTFOLIO"));
        assert!(doc.contains_text("Sam Lee"));
        assert!(!doc.contains_text("School:"));
        assert!(doc.contains_text("SUMMARY"));
        assert!(!doc.contains_text("ACADEMIC RECORD"));
        assert!(!doc.contains_text("INSIGHTS"));

        let page = &doc.pages[0];
        let summary_values: Vec<_> = page.text_runs().filter(|t| *t == "0").collect();
        assert_eq!(summary_values.len(), 3);
    }

    #[tokio::test]
    async fn test_full_text_in_priority_order() {
        let long = "word ".repeat(120);
        let mut award = AchievementEntry::new("Science Olympiad medal", Category::Award);
        award.description = Some(long.clone());
        let mut lead = AchievementEntry::new("Student council", Category::Leadership);
        lead.verification = Verification::Verified;
        lead.hours = Some(30.0);

        let model = ContentModel::builder().entry(award).entry(lead).build();
        let doc = lay_out(&model).await;
        let runs: Vec<&str> = doc.pages.iter().flat_map(|p| p.text_runs()).collect();

        let leadership = runs.iter().position(|t| t.starts_with("LEADERSHIP (1)")).unwrap();
        let awards = runs.iter().position(|t| t.starts_with("AWARDS (1)")).unwrap();
        assert!(leadership < awards);
        assert!(doc.contains_text("* Student council [Verified]"));
        assert!(!doc.contains_text("..."));

        let words: usize = runs.iter().map(|t| t.matches("word").count()).sum();
        assert_eq!(words, 120);
        assert!(doc.contains_text("30"));
    }

    #[tokio::test]
    async fn test_ascii_dividers_between_entries() {
        let model = ContentModel::builder()
            .entry(AchievementEntry::new("Chess club", Category::Club))
            .entry(AchievementEntry::new("Drama club", Category::Club))
            .build();
        let doc = lay_out(&model).await;
        let dividers = doc
            .placements()
            .filter(|(_, p)| p.kind == BlockKind::Divider)
            .count();
        // Two around the header fields, one between the club entries.
        assert_eq!(dividers, 3);
    }
}
