//! General eligibility: the account is neither blocked nor a bot.

use flagrev_core::models::{AccountInfo, Criterion, PredicateResult};

pub fn check(account: &AccountInfo) -> Vec<PredicateResult> {
    let blocked = if account.blocked {
        PredicateResult::new(Criterion::NotBlocked, false, "Account is currently blocked.")
    } else {
        PredicateResult::new(Criterion::NotBlocked, true, "Account is not blocked.")
    };

    let bot = if account.bot {
        PredicateResult::new(Criterion::NotBot, false, "Account is a bot.")
    } else {
        PredicateResult::new(Criterion::NotBot, true, "Account is not a bot.")
    };

    vec![blocked, bot]
}
