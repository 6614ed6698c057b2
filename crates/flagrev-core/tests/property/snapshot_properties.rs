use chrono::{Duration, TimeZone, Utc};
use flagrev_core::models::*;
use proptest::prelude::*;

fn snapshot_from_offsets(offsets: &[(i32, i64)]) -> ActivitySnapshot {
    let cutoff = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let contributions = offsets
        .iter()
        .enumerate()
        .map(|(i, (ns, hours))| Contribution {
            page: format!("P{i}"),
            namespace: NamespaceId(*ns),
            timestamp: cutoff - Duration::hours(*hours),
            summary: String::new(),
            revision_id: i as u64,
        })
        .collect();
    ActivitySnapshot::from_parts(SnapshotParts {
        account: AccountInfo::new("Prop", offsets.len() as u64),
        cutoff,
        contributions,
        flagged_edit_count: 0,
        flagged_count_exact: true,
        log_events: vec![],
        registration: cutoff - Duration::days(1000),
        reviewer_stats: ReviewerStats::default(),
    })
}

fn arb_namespace() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), Just(1), Just(2), Just(4), Just(10), Just(828)]
}

proptest! {
    #[test]
    fn contributions_never_increase_in_time(
        offsets in proptest::collection::vec((arb_namespace(), -200i64..5000), 0..60),
    ) {
        let snapshot = snapshot_from_offsets(&offsets);
        for w in snapshot.contributions().windows(2) {
            prop_assert!(w[0].timestamp >= w[1].timestamp);
        }
        for c in snapshot.contributions() {
            prop_assert!(c.timestamp <= snapshot.cutoff());
        }
    }

    #[test]
    fn article_sequence_is_filtered_subsequence(
        offsets in proptest::collection::vec((arb_namespace(), 0i64..5000), 0..60),
    ) {
        let snapshot = snapshot_from_offsets(&offsets);
        let expected: Vec<_> = snapshot
            .contributions()
            .iter()
            .filter(|c| c.namespace == NamespaceId::MAIN)
            .cloned()
            .collect();
        prop_assert_eq!(snapshot.article_contributions(), expected.as_slice());
    }
}
