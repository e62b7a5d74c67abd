use super::StyleSheet;
use folio_layout::{FieldRow, Paragraph, StyledText, TextStyle};
use folio_types::{AcademicRecord, AchievementEntry, ProfileSummary};
use itertools::Itertools;

pub(crate) const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `limit` characters, the last three being `...`
/// when anything was cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(ELLIPSIS.len())).collect();
    format!("{}{}", kept, ELLIPSIS)
}

pub(crate) fn format_hours(hours: f32) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    }
}

pub(crate) fn format_gpa(gpa: f32) -> String {
    format!("{:.2}", gpa)
}

pub(crate) fn grade_label(grade: u8) -> String {
    format!("Grade {}", grade)
}

/// `Grade 10` or `Grades 9, 10, 11`.
pub(crate) fn grades_label(grades: &[u8]) -> Option<String> {
    match grades {
        [] => None,
        [grade] => Some(grade_label(*grade)),
        _ => Some(format!("Grades {}", grades.iter().join(", "))),
    }
}

/// Short facts about an entry, in display order. Absent fields are skipped.
pub(crate) fn entry_facts(entry: &AchievementEntry) -> Vec<String> {
    let mut facts = Vec::new();
    if let Some(role) = entry.role() {
        facts.push(role.to_string());
    }
    if let Some(dates) = entry.date_range() {
        facts.push(dates);
    }
    if let Some(grades) = grades_label(&entry.participation_grades()) {
        facts.push(grades);
    }
    if let Some(hours) = entry.hours() {
        facts.push(format!("{} hrs", format_hours(hours)));
    }
    facts
}

/// Label/value pairs for a student's identity. Missing fields are skipped.
pub(crate) fn profile_fields(profile: &ProfileSummary) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(name) = profile.name() {
        fields.push(("Name", name.to_string()));
    }
    if let Some(school) = profile.school() {
        fields.push(("School", school.to_string()));
    }
    if let Some(grade) = profile.grade_level {
        fields.push(("Grade", grade.to_string()));
    }
    fields
}

/// GPA and test score rows of an academic record.
pub(crate) fn academic_fields(record: &AcademicRecord) -> Vec<(String, String)> {
    let gpas = [
        ("Weighted GPA", record.weighted_gpa()),
        ("Unweighted GPA", record.unweighted_gpa()),
    ];
    gpas.into_iter()
        .filter_map(|(label, gpa)| gpa.map(|g| (label.to_string(), format_gpa(g))))
        .chain(
            record
                .scored_tests()
                .map(|t| (t.label(), t.score.trim().to_string())),
        )
        .collect()
}

pub(crate) fn course_list(record: &AcademicRecord) -> Option<String> {
    let courses = record.named_courses().map(|c| c.label()).join("; ");
    (!courses.is_empty()).then_some(courses)
}

pub(crate) fn college_list(record: &AcademicRecord) -> Option<String> {
    let colleges = record.colleges().join(", ");
    (!colleges.is_empty()).then_some(colleges)
}

pub(crate) fn field_row(sheet: &StyleSheet, label: &str, value: impl Into<String>) -> FieldRow {
    FieldRow {
        label: StyledText::new(label, sheet.label),
        value: StyledText::new(value, sheet.body),
        label_width: sheet.label_width,
    }
}

pub(crate) fn paragraph(text: impl Into<String>, style: TextStyle) -> Paragraph {
    Paragraph::new(StyledText::new(text, style))
}
