//! Proportional type, colored section bars, stat strip and inline images.

use super::common::{
    academic_fields, college_list, course_list, entry_facts, field_row, format_hours, grade_label,
    paragraph,
};
use super::{RenderContext, StyleRenderer, StyleSheet};
use crate::model::ContentModel;
use crate::pipeline::GeneratorConfig;
use folio_layout::{
    ActivityCard, Align, Banner, CardChrome, Color, FontSpec, FooterSpec, LayoutError,
    SectionHeader, StatCell, StatGrid, StyledText, TextStyle,
};
use folio_traits::ImageResolver;
use folio_types::AchievementEntry;

const NAVY: Color = Color::rgb(0x1E, 0x3A, 0x5F);
const BLUE: Color = Color::rgb(0x25, 0x63, 0xEB);
const SLATE: Color = Color::rgb(0x1F, 0x29, 0x37);
const MUTED: Color = Color::rgb(0x6B, 0x72, 0x80);
const LIGHT: Color = Color::rgb(0xF3, 0xF4, 0xF6);
const BORDER: Color = Color::rgb(0xE5, 0xE7, 0xEB);
const GREEN: Color = Color::rgb(0x16, 0xA3, 0x4A);

pub struct ProfessionalStyle {
    sheet: StyleSheet,
    fallback_name: String,
}

impl ProfessionalStyle {
    pub fn new(config: &GeneratorConfig, model: &ContentModel) -> Self {
        let footer_label = config.document_title(model.profile.name());
        let sheet = StyleSheet {
            title: TextStyle::new(FontSpec::helvetica(20.0).bold(), Color::WHITE),
            subtitle: TextStyle::new(FontSpec::helvetica(11.0), Color::WHITE),
            heading: TextStyle::new(FontSpec::helvetica(12.0).bold(), Color::WHITE),
            entry_title: TextStyle::new(FontSpec::helvetica(11.5).bold(), NAVY),
            body: TextStyle::new(FontSpec::helvetica(9.5).with_line_height(1.4), SLATE),
            label: TextStyle::new(FontSpec::helvetica(9.5).bold(), MUTED),
            muted: TextStyle::new(FontSpec::helvetica(8.5).italic(), MUTED),
            primary: NAVY,
            accent: BLUE,
            surface: LIGHT,
            border: BORDER,
            verified: GREEN,
            label_width: 130.0,
            block_spacing: 8.0,
            footer: FooterSpec::new(TextStyle::new(FontSpec::helvetica(8.0), MUTED))
                .with_label(footer_label)
                .with_rule(BORDER)
                .with_number_align(Align::Right),
        };
        Self {
            sheet,
            fallback_name: format!("{} {}", config.fallback_name, config.document_label),
        }
    }

    fn section(&self, title: &str) -> SectionHeader {
        SectionHeader {
            bar: Some(self.sheet.primary),
            padding: 6.0,
            ..SectionHeader::new(StyledText::new(title, self.sheet.heading))
        }
    }

    fn header_banner(&self, model: &ContentModel) -> Banner {
        let sheet = &self.sheet;
        let name = model
            .profile
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_name.clone());
        let lines = [
            model.profile.school().map(str::to_string),
            model.profile.grade_level.map(grade_label),
        ]
        .into_iter()
        .flatten()
        .map(|line| StyledText::new(line, sheet.subtitle))
        .collect();

        Banner {
            title: StyledText::new(name, sheet.title),
            lines,
            fill: Some(sheet.primary),
            padding: 16.0,
            align: Align::Left,
        }
    }

    fn stat_strip(&self, model: &ContentModel) -> StatGrid {
        let stats = &model.stats;
        StatGrid {
            cells: vec![
                StatCell::new(stats.total_entries.to_string(), "Activities"),
                StatCell::new(stats.verified.to_string(), "Verified"),
                StatCell::new(format_hours(stats.total_hours), "Hours"),
                StatCell::new(stats.years_active.to_string(), "Years Active"),
            ],
            columns: 4,
            value_style: TextStyle::new(FontSpec::helvetica(16.0).bold(), NAVY),
            label_style: TextStyle::new(FontSpec::helvetica(8.0), MUTED),
            fill: Some(self.sheet.surface),
            gap: 8.0,
            padding: 8.0,
        }
    }

    fn card_chrome(&self) -> CardChrome {
        CardChrome {
            padding: 10.0,
            background: None,
            border: Some(self.sheet.border),
            accent: Some(self.sheet.accent),
            gap: 4.0,
            check: Some(self.sheet.verified),
            ..CardChrome::default()
        }
    }

    async fn entry_card<R: ImageResolver>(
        &self,
        entry: &AchievementEntry,
        ctx: &mut RenderContext<'_, R>,
    ) -> ActivityCard {
        let sheet = &self.sheet;
        let mut facts = entry_facts(entry);
        if entry.is_verified() {
            facts.push("Verified".to_string());
        }
        let meta = if facts.is_empty() {
            Vec::new()
        } else {
            vec![StyledText::new(facts.join("  |  "), sheet.muted)]
        };

        let mut body = Vec::new();
        if let Some(description) = entry.description() {
            body.push(StyledText::new(description, sheet.body));
        }
        if let Some(impact) = entry.impact() {
            body.push(StyledText::new(format!("Impact: {}", impact), sheet.body));
        }

        ActivityCard {
            title: StyledText::new(entry.title.clone(), sheet.entry_title),
            meta,
            body,
            verified: entry.is_verified(),
            images: ctx.resolve_images(&entry.image_urls).await,
            chrome: self.card_chrome(),
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
        ctx.place(self.section("Academic Record"))?;
        for (label, value) in academic_fields(record) {
            ctx.place(field_row(&self.sheet, &label, value))?;
        }
        if let Some(courses) = course_list(record) {
            ctx.place(field_row(&self.sheet, "Courses", courses))?;
        }
        if let Some(colleges) = college_list(record) {
            ctx.place(field_row(&self.sheet, "Target Colleges", colleges))?;
        }
        Ok(())
    }
}

impl StyleRenderer for ProfessionalStyle {
    fn stylesheet(&self) -> &StyleSheet {
        &self.sheet
    }

    async fn render<R: ImageResolver>(
        &self,
        model: &ContentModel,
        ctx: &mut RenderContext<'_, R>,
    ) -> Result<(), LayoutError> {
        ctx.place(self.header_banner(model))?;
        ctx.place(self.stat_strip(model))?;

        self.render_academics(model, ctx)?;

        for (category, entries) in model.by_priority() {
            ctx.place(self.section(category.label()))?;
            for entry in entries {
                let card = self.entry_card(entry, ctx).await;
                ctx.place(card)?;
            }
        }

        if !model.insights.is_empty() {
            ctx.place(self.section("Personal Insights"))?;
            for insight in &model.insights {
                ctx.place(ActivityCard {
                    title: StyledText::new(
                        insight.prompt.clone(),
                        TextStyle::new(FontSpec::helvetica(10.0).bold(), BLUE),
                    ),
                    meta: Vec::new(),
                    body: vec![StyledText::new(insight.answer.clone(), self.sheet.body)],
                    verified: false,
                    images: Vec::new(),
                    chrome: CardChrome {
                        background: Some(self.sheet.surface),
                        ..CardChrome::default()
                    },
                })?;
            }
        } else {
            log::debug!("No answered insights; skipping the insights section");
        }

        if model.entries.is_empty() {
            ctx.place(paragraph("No activities recorded yet.", self.sheet.muted))?;
        }
        Ok(())
    }
}
