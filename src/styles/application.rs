//! Form-like layout with numbered sections and hard caps on content.

use super::common::{
    academic_fields, college_list, course_list, entry_facts, field_row, paragraph, profile_fields,
    truncate_chars,
};
use super::{RenderContext, StyleRenderer, StyleSheet};
use crate::model::ContentModel;
use crate::pipeline::{ApplicationLimits, GeneratorConfig};
use folio_layout::{
    ActivityCard, Align, Banner, CardChrome, Color, FontSpec, FooterSpec, LayoutError, Paragraph,
    Rule, SectionHeader, StyledText, TextStyle,
};
use folio_traits::ImageResolver;
use folio_types::AchievementEntry;

const INK: Color = Color::rgb(0x11, 0x18, 0x27);
const GRAY: Color = Color::rgb(0x4B, 0x55, 0x63);
const LINE: Color = Color::rgb(0xD1, 0xD5, 0xDB);

pub struct ApplicationStyle {
    sheet: StyleSheet,
    limits: ApplicationLimits,
    fallback_name: String,
}

impl ApplicationStyle {
    pub fn new(config: &GeneratorConfig) -> Self {
        let sheet = StyleSheet {
            title: TextStyle::new(FontSpec::helvetica(16.0).bold(), INK),
            subtitle: TextStyle::new(FontSpec::helvetica(11.0), GRAY),
            heading: TextStyle::new(FontSpec::helvetica(11.0).bold(), INK),
            entry_title: TextStyle::new(FontSpec::helvetica(10.0).bold(), INK),
            body: TextStyle::new(FontSpec::helvetica(9.0).with_line_height(1.35), INK),
            label: TextStyle::new(FontSpec::helvetica(9.0).bold(), GRAY),
            muted: TextStyle::new(FontSpec::helvetica(8.5).italic(), GRAY),
            primary: INK,
            accent: INK,
            surface: Color::WHITE,
            border: LINE,
            verified: INK,
            label_width: 110.0,
            block_spacing: 6.0,
            footer: FooterSpec::new(TextStyle::new(FontSpec::helvetica(8.0), GRAY))
                .with_label("Application Format")
                .with_rule(LINE)
                .with_number_align(Align::Right),
        };
        Self {
            sheet,
            limits: config.application_limits,
            fallback_name: config.fallback_name.clone(),
        }
    }

    fn section(&self, number: usize, title: &str) -> SectionHeader {
        SectionHeader {
            underline: Some(Rule::new(INK, 0.75)),
            padding: 2.0,
            ..SectionHeader::new(StyledText::new(
                format!("{}. {}", number, title),
                self.sheet.heading,
            ))
        }
    }

    fn card(&self, title: String, meta: Vec<String>, body: Vec<String>) -> ActivityCard {
        let sheet = &self.sheet;
        let meta = if meta.is_empty() {
            Vec::new()
        } else {
            vec![StyledText::new(meta.join("  |  "), sheet.label)]
        };
        ActivityCard {
            title: StyledText::new(title, sheet.entry_title),
            meta,
            body: body
                .into_iter()
                .map(|text| StyledText::new(text, sheet.body))
                .collect(),
            verified: false,
            images: Vec::new(),
            chrome: CardChrome {
                padding: 6.0,
                border: Some(sheet.border),
                gap: 3.0,
                ..CardChrome::default()
            },
        }
    }

    /// Description and impact, each cut to the description limit.
    fn entry_body(&self, entry: &AchievementEntry) -> Vec<String> {
        let limit = self.limits.description_chars;
        [
            entry.description().map(|d| truncate_chars(d, limit)),
            entry
                .impact()
                .map(|i| format!("Impact: {}", truncate_chars(i, limit))),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn honor_card(&self, index: usize, entry: &AchievementEntry) -> ActivityCard {
        let mut meta = vec![entry.category.singular().to_string()];
        meta.extend(entry_facts(entry));
        if entry.is_verified() {
            meta.push("Verified".to_string());
        }
        self.card(
            format!("{}. {}", index + 1, entry.title),
            meta,
            self.entry_body(entry),
        )
    }

    fn activity_card(&self, index: usize, entry: &AchievementEntry) -> ActivityCard {
        let mut meta = vec![entry.category.singular().to_string()];
        meta.extend(entry_facts(entry));
        if let Some(year) = entry.school_year() {
            meta.push(year.to_string());
        }
        self.card(
            format!("{}. {}", index + 1, entry.title),
            meta,
            self.entry_body(entry),
        )
    }

    fn omitted_note(&self, omitted: usize, noun: &str) -> Option<Paragraph> {
        (omitted > 0).then(|| {
            paragraph(
                format!("+{} additional {} not shown", omitted, noun),
                self.sheet.muted,
            )
        })
    }
}

impl StyleRenderer for ApplicationStyle {
    fn stylesheet(&self) -> &StyleSheet {
        &self.sheet
    }

    async fn render<R: ImageResolver>(
        &self,
        model: &ContentModel,
        ctx: &mut RenderContext<'_, R>,
    ) -> Result<(), LayoutError> {
        let sheet = &self.sheet;
        let limits = self.limits;
        let mut number = 0;
        let mut next_section = |title: &str| {
            number += 1;
            self.section(number, title)
        };

        let name = model.profile.name().unwrap_or(self.fallback_name.as_str());
        ctx.place(Banner {
            title: StyledText::new("Student Application Summary", sheet.title),
            lines: vec![StyledText::new(name, sheet.subtitle)],
            fill: None,
            padding: 4.0,
            align: Align::Center,
        })?;

        let fields = profile_fields(&model.profile);
        if !fields.is_empty() {
            ctx.place(next_section("Student Information"))?;
            for (label, value) in fields {
                ctx.place(field_row(sheet, label, value))?;
            }
        }

        if let Some(record) = model.academic.as_ref().filter(|r| !r.is_empty()) {
            ctx.place(next_section("Academic Record"))?;
            for (label, value) in academic_fields(record) {
                ctx.place(field_row(sheet, &label, value))?;
            }
            if let Some(courses) = course_list(record) {
                ctx.place(field_row(sheet, "Courses", courses))?;
            }
            if let Some(colleges) = college_list(record) {
                ctx.place(field_row(sheet, "Target Colleges", colleges))?;
            }
        }

        let honors: Vec<_> = model.honors().collect();
        if !honors.is_empty() {
            ctx.place(next_section("Honors"))?;
            for (i, entry) in honors.iter().take(limits.max_honors).enumerate() {
                ctx.place(self.honor_card(i, entry))?;
            }
            if let Some(note) = self.omitted_note(honors.len().saturating_sub(limits.max_honors), "honors") {
                ctx.place(note)?;
            }
        }

        let activities: Vec<_> = model.activities().collect();
        if !activities.is_empty() {
            ctx.place(next_section("Activities"))?;
            for (i, entry) in activities.iter().take(limits.max_activities).enumerate() {
                ctx.place(self.activity_card(i, entry))?;
            }
            let omitted = activities.len().saturating_sub(limits.max_activities);
            if let Some(note) = self.omitted_note(omitted, "activities") {
                log::debug!("{} activities left out of the application format", omitted);
                ctx.place(note)?;
            }
        }

        if !model.insights.is_empty() {
            ctx.place(next_section("Additional Information"))?;
            for insight in &model.insights {
                let mut card = self.card(
                    insight.prompt.clone(),
                    Vec::new(),
                    vec![truncate_chars(&insight.answer, limits.insight_chars)],
                );
                card.title.style = sheet.label;
                ctx.place(card)?;
            }
        }
        Ok(())
    }
}
