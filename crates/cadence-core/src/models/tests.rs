//! Tests for the model types.

use jiff::civil::date;
use jiff::Timestamp;

use super::*;
use crate::ConsoleError;

fn plan_with(releases: Vec<ReleaseEntry>) -> Plan {
    Plan {
        id: 1,
        code: "C-1".to_string(),
        name: "Sample".to_string(),
        sku_name: String::new(),
        sku_price: String::new(),
        posted: None,
        created_at: Timestamp::from_second(1_700_000_000).unwrap(),
        releases,
    }
}

#[test]
fn test_span_counts_gap_days() {
    let plan = plan_with(vec![
        ReleaseEntry::new(date(2024, 1, 1), 2),
        ReleaseEntry::new(date(2024, 1, 5), 3),
    ]);
    assert_eq!(plan.first_date(), Some(date(2024, 1, 1)));
    assert_eq!(plan.last_date(), Some(date(2024, 1, 5)));
    assert_eq!(plan.span_days(), 5);
    assert_eq!(plan.total_quantity(), 5);
}

#[test]
fn test_empty_plan_has_no_span() {
    let plan = plan_with(vec![]);
    assert_eq!(plan.first_date(), None);
    assert_eq!(plan.span_days(), 0);
    assert_eq!(plan.total_quantity(), 0);
}

#[test]
fn test_dates_need_not_be_sorted() {
    let plan = plan_with(vec![
        ReleaseEntry::new(date(2024, 1, 9), 1),
        ReleaseEntry::new(date(2024, 1, 3), 1),
    ]);
    assert_eq!(plan.first_date(), Some(date(2024, 1, 3)));
    assert_eq!(plan.last_date(), Some(date(2024, 1, 9)));
}

#[test]
fn test_posted_flag_collapses_for_display() {
    let mut plan = plan_with(vec![]);
    assert!(!plan.is_posted());
    plan.posted = Some(false);
    assert!(!plan.is_posted());
    plan.posted = Some(true);
    assert!(plan.is_posted());
}

#[test]
fn test_series_fills_inclusive_range() {
    let entries = ReleaseEntry::series(date(2024, 2, 27), date(2024, 3, 1), &[1, 2, 3, 4])
        .expect("series should build");
    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    // Inclusive range over a leap-year month boundary.
    assert_eq!(
        dates,
        vec![
            date(2024, 2, 27),
            date(2024, 2, 28),
            date(2024, 2, 29),
            date(2024, 3, 1)
        ]
    );
    assert_eq!(entries[2].quantity, 3);
}

#[test]
fn test_series_rejects_count_mismatch() {
    let result = ReleaseEntry::series(date(2024, 1, 1), date(2024, 1, 3), &[1, 2]);
    assert!(matches!(result, Err(ConsoleError::InvalidInput { .. })));
}

#[test]
fn test_series_rejects_inverted_range() {
    let result = ReleaseEntry::series(date(2024, 1, 3), date(2024, 1, 1), &[1]);
    assert!(matches!(result, Err(ConsoleError::InvalidInput { .. })));
}

#[test]
fn test_summary_projection() {
    let mut plan = plan_with(vec![
        ReleaseEntry::new(date(2024, 1, 1), 10),
        ReleaseEntry::new(date(2024, 1, 2), 20),
    ]);
    plan.posted = Some(true);

    let summary = PlanSummary::from(&plan);
    assert_eq!(summary.name, "Sample");
    assert!(summary.posted);
    assert_eq!(summary.release_count, 2);
    assert_eq!(summary.total_quantity, 30);
    assert_eq!(summary.first_date, Some(date(2024, 1, 1)));
    assert_eq!(summary.last_date, Some(date(2024, 1, 2)));
}

#[test]
fn test_plan_serde_defaults() {
    // Older exports omit optional columns entirely.
    let json = r#"{"id": 5, "name": "bare", "created_at": "2024-01-01T00:00:00Z"}"#;
    let plan: Plan = serde_json::from_str(json).expect("should deserialize");
    assert_eq!(plan.code, "");
    assert_eq!(plan.posted, None);
    assert!(plan.releases.is_empty());
}
