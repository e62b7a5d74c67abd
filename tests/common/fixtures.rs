use chrono::NaiveDate;
use folio::types::{
    AcademicRecord, AchievementEntry, Category, Course, InsightAnswer, ProfileSummary, TestScore,
    Verification,
};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

pub fn profile(name: &str) -> ProfileSummary {
    ProfileSummary {
        name: Some(name.to_string()),
        school: Some("Riverside High School".to_string()),
        grade_level: Some(11),
    }
}

pub fn entry(title: &str, category: Category) -> AchievementEntry {
    AchievementEntry::new(title, category)
}

/// An entry with every optional field filled in.
pub fn detailed_entry(title: &str, category: Category, description: &str) -> AchievementEntry {
    let mut entry = AchievementEntry::new(title, category);
    entry.description = Some(description.to_string());
    entry.impact = Some("Raised participation across the school.".to_string());
    entry.role = Some("Organizer".to_string());
    entry.start_date = NaiveDate::from_ymd_opt(2022, 9, 1);
    entry.end_date = NaiveDate::from_ymd_opt(2023, 6, 1);
    entry.grade_levels = vec![10, 11];
    entry.school_year = Some("2022-2023".to_string());
    entry.hours = Some(45.0);
    entry.verification = Verification::Verified;
    entry
}

/// `count` activity entries, none of them honors.
pub fn activities(count: usize) -> Vec<AchievementEntry> {
    let categories = [
        Category::Club,
        Category::Volunteering,
        Category::Leadership,
        Category::Job,
        Category::Extracurricular,
        Category::Internship,
    ];
    (0..count)
        .map(|i| entry(&format!("Activity {}", i + 1), categories[i % categories.len()]))
        .collect()
}

pub fn academic_record() -> AcademicRecord {
    AcademicRecord {
        weighted_gpa: Some(4.25),
        unweighted_gpa: Some(3.92),
        test_scores: vec![TestScore {
            test_type: "SAT".to_string(),
            subject: None,
            score: "1480".to_string(),
        }],
        courses: vec![Course {
            name: "AP Calculus BC".to_string(),
            teacher: Some("Ms. Rivera".to_string()),
        }],
        target_colleges: vec!["State University".to_string()],
    }
}

pub fn insight(key: &str, answer: &str) -> InsightAnswer {
    InsightAnswer::new(key, answer)
}

/// A small encoded PNG.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::from_pixel(width, height, Rgb([30, 90, 200]))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// Words of ordinary prose, `words` long.
pub fn prose(words: usize) -> String {
    const WORDS: [&str; 8] = [
        "students", "organized", "weekly", "sessions", "for", "younger", "community", "members",
    ];
    (0..words).map(|i| WORDS[i % WORDS.len()]).collect::<Vec<_>>().join(" ")
}
