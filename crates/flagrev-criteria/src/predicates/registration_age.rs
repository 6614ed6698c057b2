use chrono::{DateTime, Duration, Utc};
use flagrev_core::models::{Criterion, PredicateResult};

/// Pass iff `now - registered >= min_days`.
pub fn check(registered: DateTime<Utc>, now: DateTime<Utc>, min_days: u32) -> PredicateResult {
    let age = now - registered;
    let age_days = age.num_days();

    if age >= Duration::days(i64::from(min_days)) {
        PredicateResult::new(
            Criterion::RegistrationAge,
            true,
            format!(
                "Account was registered {age_days} days ago, meeting the required minimum age of {min_days} days."
            ),
        )
    } else {
        PredicateResult::new(
            Criterion::RegistrationAge,
            false,
            format!(
                "Account was registered only {age_days} days ago; it must be at least {min_days} days old."
            ),
        )
    }
}
