use folio_types::AchievementEntry;
use itertools::Itertools;

/// Aggregate figures shown in summary blocks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioStats {
    pub total_entries: usize,
    pub verified: usize,
    pub total_hours: f32,
    /// Number of distinct school years with at least one entry.
    pub years_active: usize,
}

impl PortfolioStats {
    pub fn from_entries(entries: &[AchievementEntry]) -> Self {
        Self {
            total_entries: entries.len(),
            verified: entries.iter().filter(|e| e.is_verified()).count(),
            total_hours: entries.iter().filter_map(AchievementEntry::hours).sum(),
            years_active: entries
                .iter()
                .filter_map(AchievementEntry::school_year)
                .unique()
                .count(),
        }
    }
}
