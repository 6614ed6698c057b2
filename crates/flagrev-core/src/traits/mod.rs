mod activity_source;
mod evaluator;

pub use activity_source::{ActivitySource, ContributionQuery};
pub use evaluator::IEligibilityEvaluator;
