use serde::{Deserialize, Serialize};

/// Which check produced a [`PredicateResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    NotBlocked,
    NotBot,
    ReviewRightsNeverRevoked,
    NeverBlocked,
    RegistrationAge,
    EditCount,
    ContentOrReviewedEdits,
    SpacedEdits,
    DistinctPages,
    RecentArticleActivity,
    CustomSummaries,
    RevertRatio,
}

/// Outcome of one check, with a sentence that states the measured value
/// and the threshold it was compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateResult {
    pub criterion: Criterion,
    pub met: bool,
    pub text: String,
}

impl PredicateResult {
    pub fn new(criterion: Criterion, met: bool, text: impl Into<String>) -> Self {
        Self {
            criterion,
            met,
            text: text.into(),
        }
    }
}
