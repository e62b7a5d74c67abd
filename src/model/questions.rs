use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: String,
    pub prompt: String,
}

impl Question {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}

/// The ordered set of insight questions answers are keyed against.
///
/// Answers are always emitted in the order of this set, regardless of the
/// order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

const DEFAULT_QUESTIONS: [(&str, &str); 6] = [
    (
        "proudest_achievement",
        "What accomplishment are you most proud of, and why?",
    ),
    (
        "leadership_moment",
        "Describe a time you stepped up to lead others.",
    ),
    (
        "challenge_overcome",
        "Tell us about a challenge you faced and how you worked through it.",
    ),
    (
        "community_impact",
        "How have you made a difference in your school or community?",
    ),
    (
        "future_goals",
        "What do you hope to study or pursue after high school?",
    ),
    (
        "additional_info",
        "Is there anything else you would like readers to know about you?",
    ),
];

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Position of `key` within the set.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_QUESTIONS
                .iter()
                .map(|(key, prompt)| Question::new(*key, *prompt))
                .collect(),
        )
    }
}
