pub mod color;
pub mod geometry;
pub mod records;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use records::{
    AcademicRecord, AchievementEntry, Category, Course, InsightAnswer, PortfolioInput,
    ProfileSummary, TestScore, Verification,
};
