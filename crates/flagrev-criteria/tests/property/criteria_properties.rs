use chrono::Duration;
use flagrev_core::models::*;
use flagrev_criteria::predicates::*;
use flagrev_criteria::CriteriaEngine;
use proptest::prelude::*;

use crate::support::*;

proptest! {
    // `met` is exactly `value >= threshold`, boundary included.
    #[test]
    fn edit_count_met_iff_at_least_threshold(value in 0u64..10_000, threshold in 0u64..10_000) {
        let r = edit_count::check(value, threshold);
        prop_assert_eq!(r.met, value >= threshold);
        prop_assert!(r.text.contains(&value.to_string()));
        prop_assert!(r.text.contains(&threshold.to_string()));
    }

    #[test]
    fn edit_count_boundary_always_passes(threshold in 0u64..1_000_000) {
        prop_assert!(edit_count::check(threshold, threshold).met);
    }

    #[test]
    fn custom_summaries_met_iff_at_least_threshold(value in 0u64..1_000, threshold in 0u64..1_000) {
        let stats = ReviewerStats::parse(&format!("editComments={value}")).unwrap();
        prop_assert_eq!(custom_summaries::check(&stats, threshold).met, value >= threshold);
    }

    #[test]
    fn or_gate_met_iff_either_branch(
        content in 0u64..600,
        reviewed in 0u64..400,
        min_content in 0u64..600,
        min_reviewed in 0u64..400,
    ) {
        let stats = ReviewerStats::parse(&format!("totalContentEdits={content}")).unwrap();
        let r = content_or_reviewed::check(&stats, reviewed, true, min_content, min_reviewed);
        prop_assert_eq!(r.met, content >= min_content || reviewed >= min_reviewed);
    }

    #[test]
    fn registration_age_met_iff_old_enough(age_hours in 0i64..5_000, min_days in 0u32..200) {
        let registered = now() - Duration::hours(age_hours);
        let r = registration_age::check(registered, now(), min_days);
        prop_assert_eq!(r.met, age_hours >= i64::from(min_days) * 24);
    }

    // Revert ratio auto-passes whenever the statistic is absent.
    #[test]
    fn revert_ratio_passes_without_stat(edit_count in 0u64..1_000_000, max_ratio in 0.0f64..1.0) {
        prop_assert!(revert_ratio::check(&ReviewerStats::default(), edit_count, max_ratio).met);
    }

    #[test]
    fn revert_ratio_met_iff_within_maximum(reverted in 0u64..500, total in 1u64..5_000) {
        let stats = ReviewerStats::parse(&format!("revertedEdits={reverted}")).unwrap();
        let r = revert_ratio::check(&stats, total, 0.03);
        prop_assert_eq!(r.met, reverted as f64 / total as f64 <= 0.03);
    }

    // Appending older, sufficiently spaced edits never lowers the count.
    #[test]
    fn spaced_count_is_monotonic_under_older_appends(
        recent in proptest::collection::vec(0i64..100, 0..30),
        extra_gaps in proptest::collection::vec(1i64..20, 0..20),
    ) {
        let mut offsets = recent.clone();
        offsets.sort();
        let base = spaced_edits::count(&article_edits(&offsets));

        let mut oldest = offsets.last().copied().unwrap_or(0);
        let mut extended = offsets.clone();
        let mut prev = base;
        for gap in extra_gaps {
            oldest += 3 + gap;
            extended.push(oldest);
            let n = spaced_edits::count(&article_edits(&extended));
            prop_assert!(n >= prev, "count dropped from {} to {}", prev, n);
            prev = n;
        }
    }

    #[test]
    fn recent_activity_fails_below_volume_floor(len in 0usize..5, min in 5u32..10) {
        let offsets: Vec<i64> = vec![0; len];
        let r = recent_activity::check(&article_edits(&offsets), now(), min, 30);
        prop_assert!(!r.met);
    }

    #[test]
    fn reviewer_report_order_is_input_independent(
        edit_count in 0u64..2_000,
        blocked in any::<bool>(),
        bot in any::<bool>(),
        offsets in proptest::collection::vec(0i64..400, 0..40),
    ) {
        let mut fixture = SnapshotFixture::new()
            .edit_count(edit_count)
            .contributions(article_edits(&offsets));
        if blocked {
            fixture = fixture.blocked();
        }
        if bot {
            fixture = fixture.bot();
        }
        let report = CriteriaEngine::default().evaluate_at(Tier::Reviewer, &fixture.build(), now());
        let order: Vec<Criterion> = report.results.iter().map(|r| r.criterion).collect();
        prop_assert_eq!(order.len(), 12);
        prop_assert_eq!(order[0], Criterion::NotBlocked);
        prop_assert_eq!(order[5], Criterion::EditCount);
        prop_assert_eq!(order[11], Criterion::RevertRatio);
        prop_assert_eq!(report.is_eligible(), report.results.iter().all(|r| r.met));
    }
}
