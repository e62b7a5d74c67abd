use super::questions::QuestionSet;
use super::stats::PortfolioStats;
use folio_types::{
    AcademicRecord, AchievementEntry, Category, InsightAnswer, PortfolioInput, ProfileSummary,
};
use std::collections::HashSet;

/// An insight answer joined with the prompt it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredInsight {
    pub key: String,
    pub prompt: String,
    pub answer: String,
}

/// Everything a style renderer reads, normalized once per run.
///
/// Entries keep their input order. Insights are only those with a
/// non-blank answer to a known question, ordered by the question set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentModel {
    pub profile: ProfileSummary,
    pub entries: Vec<AchievementEntry>,
    /// `None` when no academic data is present at all.
    pub academic: Option<AcademicRecord>,
    pub insights: Vec<AnsweredInsight>,
    pub stats: PortfolioStats,
}

impl ContentModel {
    pub fn builder() -> ContentModelBuilder {
        ContentModelBuilder::new()
    }

    /// Builds a model from a raw payload using the default question set.
    pub fn from_input(input: PortfolioInput) -> Self {
        ContentModelBuilder::new().input(input).build()
    }

    pub fn entries_in(&self, category: Category) -> impl Iterator<Item = &AchievementEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Categories in priority order, each with its entries, skipping empty ones.
    pub fn by_priority(&self) -> Vec<(Category, Vec<&AchievementEntry>)> {
        Category::PRIORITY
            .iter()
            .map(|&category| (category, self.entries_in(category).collect::<Vec<_>>()))
            .filter(|(_, entries)| !entries.is_empty())
            .collect()
    }

    /// Award and academic entries, in input order.
    pub fn honors(&self) -> impl Iterator<Item = &AchievementEntry> {
        self.entries.iter().filter(|e| e.category.is_honor())
    }

    /// Every entry that is not an honor, in input order.
    pub fn activities(&self) -> impl Iterator<Item = &AchievementEntry> {
        self.entries.iter().filter(|e| !e.category.is_honor())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentModelBuilder {
    questions: QuestionSet,
    profile: ProfileSummary,
    entries: Vec<AchievementEntry>,
    academic: Option<AcademicRecord>,
    insights: Vec<InsightAnswer>,
}

impl ContentModelBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn questions(mut self, questions: QuestionSet) -> Self {
        self.questions = questions;
        self
    }

    pub fn profile(mut self, profile: ProfileSummary) -> Self {
        self.profile = profile;
        self
    }

    pub fn entry(mut self, entry: AchievementEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries<I: IntoIterator<Item = AchievementEntry>>(mut self, entries: I) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn academic(mut self, academic: AcademicRecord) -> Self {
        self.academic = Some(academic);
        self
    }

    pub fn insight(mut self, answer: InsightAnswer) -> Self {
        self.insights.push(answer);
        self
    }

    pub fn insights<I: IntoIterator<Item = InsightAnswer>>(mut self, answers: I) -> Self {
        self.insights.extend(answers);
        self
    }

    pub fn input(self, input: PortfolioInput) -> Self {
        let PortfolioInput {
            profile,
            entries,
            academic,
            insights,
        } = input;
        let builder = self.profile(profile).entries(entries).insights(insights);
        match academic {
            Some(academic) => builder.academic(academic),
            None => builder,
        }
    }

    pub fn build(self) -> ContentModel {
        let entries: Vec<AchievementEntry> = self.entries.into_iter().map(normalize_entry).collect();
        let insights = answered_insights(&self.questions, self.insights);
        let academic = self.academic.filter(|a| !a.is_empty());
        let stats = PortfolioStats::from_entries(&entries);

        log::debug!(
            "Content model: {} entries, {} insights, academic record {}",
            entries.len(),
            insights.len(),
            if academic.is_some() { "present" } else { "absent" }
        );

        ContentModel {
            profile: self.profile,
            entries,
            academic,
            insights,
            stats,
        }
    }
}

fn normalize_entry(mut entry: AchievementEntry) -> AchievementEntry {
    let title = entry.title.trim();
    entry.title = if title.is_empty() {
        format!("Untitled {}", entry.category.singular())
    } else {
        title.to_string()
    };
    entry.image_urls.retain(|url| !url.trim().is_empty());
    entry
}

/// First non-blank answer per known key, in question-set order.
fn answered_insights(questions: &QuestionSet, answers: Vec<InsightAnswer>) -> Vec<AnsweredInsight> {
    let mut seen = HashSet::new();
    let mut ordered: Vec<(usize, AnsweredInsight)> = answers
        .into_iter()
        .filter(InsightAnswer::has_answer)
        .filter_map(|answer| {
            let Some(position) = questions.position(&answer.question_key) else {
                log::debug!("Ignoring answer to unknown question '{}'", answer.question_key);
                return None;
            };
            if !seen.insert(position) {
                return None;
            }
            let question = questions.get(&answer.question_key)?;
            Some((
                position,
                AnsweredInsight {
                    key: question.key.clone(),
                    prompt: question.prompt.clone(),
                    answer: answer.answer.trim().to_string(),
                },
            ))
        })
        .collect();
    ordered.sort_by_key(|(position, _)| *position);
    ordered.into_iter().map(|(_, insight)| insight).collect()
}
