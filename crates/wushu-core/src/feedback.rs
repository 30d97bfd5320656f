//! Feedback level and record returned alongside every score.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Quality band assigned to a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLevel {
    /// Final score of at least the excellent threshold.
    Excellent,
    /// Final score of at least the good threshold.
    Good,
    /// Final score below the good threshold.
    NeedsImprovement,
    /// The input could not be scored; the score is a low default.
    Error,
}

impl FeedbackLevel {
    /// Label shown to practitioners.
    pub fn label(self) -> &'static str {
        match self {
            FeedbackLevel::Excellent => "优秀",
            FeedbackLevel::Good => "良好",
            FeedbackLevel::NeedsImprovement => "需要改进",
            FeedbackLevel::Error => "错误",
        }
    }
}

impl Display for FeedbackLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Level plus ordered, deterministic suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Quality band.
    pub level: FeedbackLevel,
    /// Suggestions in emission order.
    pub suggestions: Vec<String>,
}

impl FeedbackRecord {
    /// Creates a record with the given level and no suggestions.
    pub fn new(level: FeedbackLevel) -> Self {
        Self {
            level,
            suggestions: Vec::new(),
        }
    }

    /// Error-level record with a single explanatory suggestion.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Error,
            suggestions: vec![message.into()],
        }
    }

    /// Appends a suggestion.
    pub fn push(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    /// Returns true when any suggestion contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.suggestions.iter().any(|s| s.contains(needle))
    }
}
