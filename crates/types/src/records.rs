//! Input records handed over by the achievement, academic-profile and
//! user-profile features.
//!
//! These are read once per generation run and never mutated by the engine.
//! All records deserialize from camelCase JSON so an upstream data provider
//! can pass a single [`PortfolioInput`] payload.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// The fixed set of achievement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Volunteering,
    Job,
    Award,
    Internship,
    Leadership,
    Club,
    Extracurricular,
    Academic,
    Other,
}

impl Category {
    /// Category order used when every category is listed in turn.
    pub const PRIORITY: [Category; 9] = [
        Category::Leadership,
        Category::Extracurricular,
        Category::Club,
        Category::Volunteering,
        Category::Job,
        Category::Internship,
        Category::Award,
        Category::Academic,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Volunteering => "Volunteering",
            Category::Job => "Work Experience",
            Category::Award => "Awards",
            Category::Internship => "Internships",
            Category::Leadership => "Leadership",
            Category::Club => "Clubs",
            Category::Extracurricular => "Extracurriculars",
            Category::Academic => "Academic",
            Category::Other => "Other",
        }
    }

    /// Singular form used on individual entries ("Award", "Club", ...).
    pub fn singular(self) -> &'static str {
        match self {
            Category::Volunteering => "Volunteering",
            Category::Job => "Job",
            Category::Award => "Award",
            Category::Internship => "Internship",
            Category::Leadership => "Leadership",
            Category::Club => "Club",
            Category::Extracurricular => "Extracurricular",
            Category::Academic => "Academic Honor",
            Category::Other => "Other",
        }
    }

    /// Awards and academic distinctions count as honors rather than activities.
    pub fn is_honor(self) -> bool {
        matches!(self, Category::Award | Category::Academic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verification {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl Verification {
    pub fn label(self) -> &'static str {
        match self {
            Verification::Pending => "Pending",
            Verification::Verified => "Verified",
            Verification::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementEntry {
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub ongoing: bool,
    #[serde(default)]
    pub grade_level: Option<u8>,
    #[serde(default)]
    pub school_year: Option<String>,
    #[serde(default)]
    pub hours: Option<f32>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub grade_levels: Vec<u8>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub verification: Verification,
}

impl AchievementEntry {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            description: None,
            impact: None,
            start_date: None,
            end_date: None,
            ongoing: false,
            grade_level: None,
            school_year: None,
            hours: None,
            role: None,
            grade_levels: Vec::new(),
            image_urls: Vec::new(),
            verification: Verification::Pending,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verification == Verification::Verified
    }

    /// The end date, which is ignored while the entry is ongoing.
    pub fn effective_end_date(&self) -> Option<NaiveDate> {
        if self.ongoing { None } else { self.end_date }
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    pub fn impact(&self) -> Option<&str> {
        non_blank(self.impact.as_deref())
    }

    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    pub fn school_year(&self) -> Option<&str> {
        non_blank(self.school_year.as_deref())
    }

    /// Positive, finite hours only.
    pub fn hours(&self) -> Option<f32> {
        self.hours.filter(|h| h.is_finite() && *h > 0.0)
    }

    /// Grade levels participated in, falling back to the single grade level.
    pub fn participation_grades(&self) -> Vec<u8> {
        if !self.grade_levels.is_empty() {
            let unique: BTreeSet<u8> = self.grade_levels.iter().copied().collect();
            return unique.into_iter().collect();
        }
        self.grade_level.into_iter().collect()
    }

    /// Human-readable date range such as `Sep 2022 - Present`.
    pub fn date_range(&self) -> Option<String> {
        let start = self.start_date.map(format_month);
        let end = self.effective_end_date().map(format_month);
        match (start, end, self.ongoing) {
            (Some(s), _, true) => Some(format!("{} - Present", s)),
            (None, _, true) => Some("Ongoing".to_string()),
            (Some(s), Some(e), false) if s == e => Some(s),
            (Some(s), Some(e), false) => Some(format!("{} - {}", s, e)),
            (Some(s), None, false) => Some(s),
            (None, Some(e), false) => Some(e),
            (None, None, false) => None,
        }
    }
}

fn format_month(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScore {
    pub test_type: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub score: String,
}

impl TestScore {
    /// `SAT (Math)` or just `ACT` when there is no subject.
    pub fn label(&self) -> String {
        match non_blank(self.subject.as_deref()) {
            Some(subject) => format!("{} ({})", self.test_type.trim(), subject),
            None => self.test_type.trim().to_string(),
        }
    }

    pub fn has_score(&self) -> bool {
        !self.score.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub teacher: Option<String>,
}

impl Course {
    pub fn label(&self) -> String {
        match non_blank(self.teacher.as_deref()) {
            Some(teacher) => format!("{} ({})", self.name.trim(), teacher),
            None => self.name.trim().to_string(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecord {
    #[serde(default)]
    pub weighted_gpa: Option<f32>,
    #[serde(default)]
    pub unweighted_gpa: Option<f32>,
    #[serde(default)]
    pub test_scores: Vec<TestScore>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub target_colleges: Vec<String>,
}

impl AcademicRecord {
    pub fn weighted_gpa(&self) -> Option<f32> {
        self.weighted_gpa.filter(|g| g.is_finite())
    }

    pub fn unweighted_gpa(&self) -> Option<f32> {
        self.unweighted_gpa.filter(|g| g.is_finite())
    }

    /// Test scores that carry a score.
    pub fn scored_tests(&self) -> impl Iterator<Item = &TestScore> {
        self.test_scores.iter().filter(|t| t.has_score())
    }

    pub fn named_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| c.is_named())
    }

    /// Trimmed, non-blank college names.
    pub fn colleges(&self) -> impl Iterator<Item = &str> {
        self.target_colleges
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// True when the record carries nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        self.weighted_gpa().is_none()
            && self.unweighted_gpa().is_none()
            && self.scored_tests().next().is_none()
            && self.named_courses().next().is_none()
            && self.colleges().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightAnswer {
    pub question_key: String,
    #[serde(default)]
    pub answer: String,
}

impl InsightAnswer {
    pub fn new(question_key: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_key: question_key.into(),
            answer: answer.into(),
        }
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub grade_level: Option<u8>,
}

impl ProfileSummary {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn school(&self) -> Option<&str> {
        non_blank(self.school.as_deref())
    }
}

/// Everything the upstream features provide for one generation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInput {
    #[serde(default)]
    pub profile: ProfileSummary,
    #[serde(default)]
    pub entries: Vec<AchievementEntry>,
    #[serde(default)]
    pub academic: Option<AcademicRecord>,
    #[serde(default)]
    pub insights: Vec<InsightAnswer>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_ongoing_ignores_end_date() {
        let mut entry = AchievementEntry::new("Robotics", Category::Club);
        entry.start_date = Some(date(2022, 9));
        entry.end_date = Some(date(2023, 6));
        entry.ongoing = true;

        assert_eq!(entry.effective_end_date(), None);
        assert_eq!(entry.date_range().as_deref(), Some("Sep 2022 - Present"));
    }

    #[test]
    fn test_date_range_variants() {
        let mut entry = AchievementEntry::new("Camp", Category::Volunteering);
        assert_eq!(entry.date_range(), None);

        entry.start_date = Some(date(2022, 9));
        assert_eq!(entry.date_range().as_deref(), Some("Sep 2022"));

        entry.end_date = Some(date(2023, 6));
        assert_eq!(entry.date_range().as_deref(), Some("Sep 2022 - Jun 2023"));

        entry.start_date = None;
        assert_eq!(entry.date_range().as_deref(), Some("Jun 2023"));
    }

    #[test]
    fn test_blank_optionals_are_treated_as_missing() {
        let mut entry = AchievementEntry::new("Job", Category::Job);
        entry.description = Some("   ".to_string());
        entry.role = Some(" Cashier ".to_string());
        entry.hours = Some(f32::NAN);

        assert_eq!(entry.description(), None);
        assert_eq!(entry.role(), Some("Cashier"));
        assert_eq!(entry.hours(), None);
    }

    #[test]
    fn test_participation_grades_fallback() {
        let mut entry = AchievementEntry::new("Band", Category::Extracurricular);
        assert!(entry.participation_grades().is_empty());
        entry.grade_level = Some(10);
        assert_eq!(entry.participation_grades(), vec![10]);
        entry.grade_levels = vec![11, 9, 11];
        assert_eq!(entry.participation_grades(), vec![9, 11]);
    }

    #[test]
    fn test_academic_record_without_renderable_data_is_empty() {
        let record = AcademicRecord {
            weighted_gpa: Some(f32::NAN),
            unweighted_gpa: Some(f32::INFINITY),
            test_scores: vec![TestScore {
                test_type: "SAT".to_string(),
                subject: None,
                score: "  ".to_string(),
            }],
            courses: vec![Course {
                name: "  ".to_string(),
                teacher: Some("Ms. Hopper".to_string()),
            }],
            target_colleges: vec![" ".to_string()],
        };
        assert!(record.is_empty());

        let with_course = AcademicRecord {
            courses: vec![Course {
                name: "AP Biology".to_string(),
                teacher: None,
            }],
            ..record
        };
        assert!(!with_course.is_empty());
        assert_eq!(with_course.named_courses().count(), 1);
    }

    #[test]
    fn test_deserialize_camel_case_input() {
        let json = r#"{
            "profile": { "name": "Ada Lovelace", "school": "Analytical High", "gradeLevel": 11 },
            "entries": [{
                "title": "Math Olympiad",
                "category": "award",
                "startDate": "2023-03-01",
                "imageUrls": ["https://example.com/a.png"],
                "verification": "verified"
            }],
            "academic": { "weightedGpa": 4.2, "testScores": [{ "testType": "SAT", "score": 1520 }] },
            "insights": [{ "questionKey": "future_goals", "answer": "Engineering" }]
        }"#;
        let input: PortfolioInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.profile.name(), Some("Ada Lovelace"));
        assert_eq!(input.entries[0].category, Category::Award);
        assert!(input.entries[0].is_verified());
        let academic = input.academic.unwrap();
        assert_eq!(academic.test_scores[0].score, "1520");
        assert_eq!(academic.test_scores[0].label(), "SAT");
        assert!(input.insights[0].has_answer());
    }

    #[test]
    fn test_academic_record_emptiness() {
        let mut record = AcademicRecord::default();
        assert!(record.is_empty());
        record.target_colleges.push("  ".to_string());
        assert!(record.is_empty());
        record.unweighted_gpa = Some(3.9);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_honor_categories() {
        assert!(Category::Award.is_honor());
        assert!(Category::Academic.is_honor());
        assert!(!Category::Club.is_honor());
        assert_eq!(Category::PRIORITY.len(), 9);
    }
}
