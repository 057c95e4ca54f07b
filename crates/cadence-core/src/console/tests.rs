//! Tests for the console module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::diff::DiffChange;
use crate::models::ReleaseEntry;
use crate::params::{Compare, CreatePlan, DeletePlan, Id, MovePlan, SetPosted, UpdatePlan};
use crate::ConsoleError;

/// Helper function to create a test console over a temp database
async fn create_test_console() -> (TempDir, Console) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let console = ConsoleBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create console");
    (temp_dir, console)
}

fn releases(dates: &[(i16, i8, i8)], quantity: u32) -> Vec<ReleaseEntry> {
    dates
        .iter()
        .map(|&(y, m, d)| ReleaseEntry::new(date(y, m, d), quantity))
        .collect()
}

#[tokio::test]
async fn test_create_and_get_plan() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "Spring launch".to_string(),
                code: Some("SP-01".to_string()),
                sku_name: Some("Widget".to_string()),
                sku_price: Some("19.90".to_string()),
                releases: releases(&[(2024, 1, 1), (2024, 1, 2)], 5),
            },
        )
        .await
        .expect("Failed to create plan");

    assert_eq!(plan.name, "Spring launch");
    assert_eq!(plan.posted, None);

    let fetched = console
        .get_plan("default", &Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan missing");
    assert_eq!(fetched.code, "SP-01");
    assert_eq!(fetched.releases.len(), 2);
}

#[tokio::test]
async fn test_list_plans_newest_first() {
    let (_temp_dir, console) = create_test_console().await;

    for name in ["first", "second", "third"] {
        console
            .create_plan(
                "default",
                &CreatePlan {
                    name: name.to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to create plan");
    }

    let summaries = console
        .list_plans("default")
        .await
        .expect("Failed to list plans");
    assert_eq!(summaries.len(), 3);
    // created_at resolution is sub-millisecond, so the last created plan
    // sorts first.
    assert_eq!(summaries[0].name, "third");
    assert_eq!(summaries[2].name, "first");
}

#[tokio::test]
async fn test_shops_are_isolated() {
    let (_temp_dir, console) = create_test_console().await;

    console
        .create_plan(
            "alpha",
            &CreatePlan {
                name: "only in alpha".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    let beta = console.list_plans("beta").await.expect("Failed to list");
    assert!(beta.is_empty());
}

#[tokio::test]
async fn test_update_plan_partial() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "before".to_string(),
                code: Some("C-1".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    let updated = console
        .update_plan(
            "default",
            &UpdatePlan {
                id: plan.id,
                name: Some("after".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update plan");

    assert_eq!(updated.name, "after");
    // Untouched fields survive a partial update.
    assert_eq!(updated.code, "C-1");
}

#[tokio::test]
async fn test_update_missing_plan_fails() {
    let (_temp_dir, console) = create_test_console().await;

    let result = console
        .update_plan(
            "default",
            &UpdatePlan {
                id: 404,
                name: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ConsoleError::PlanNotFound { id: 404 })
    ));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "keep me".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    let refused = console
        .delete_plan(
            "default",
            &DeletePlan {
                id: plan.id,
                confirmed: false,
            },
        )
        .await;
    assert!(matches!(refused, Err(ConsoleError::InvalidInput { .. })));

    console
        .delete_plan(
            "default",
            &DeletePlan {
                id: plan.id,
                confirmed: true,
            },
        )
        .await
        .expect("Failed to delete plan");

    let summaries = console.list_plans("default").await.expect("Failed to list");
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_copy_plan_gets_fresh_identity() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "original".to_string(),
                releases: releases(&[(2024, 3, 1)], 7),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    console
        .set_posted(
            "default",
            &SetPosted {
                id: plan.id,
                posted: Some(true),
            },
        )
        .await
        .expect("Failed to set posted");

    let copy = console
        .copy_plan("default", &Id { id: plan.id })
        .await
        .expect("Failed to copy plan");

    assert_ne!(copy.id, plan.id);
    assert_eq!(copy.name, "original (copy)");
    // The copy starts unposted regardless of the source flag.
    assert_eq!(copy.posted, None);
    assert_eq!(copy.releases, plan.releases);
}

#[tokio::test]
async fn test_set_posted_tri_state() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "flagged".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    for posted in [Some(true), Some(false), None] {
        let updated = console
            .set_posted("default", &SetPosted { id: plan.id, posted })
            .await
            .expect("Failed to set posted");
        assert_eq!(updated.posted, posted);
    }
}

#[tokio::test]
async fn test_reschedule_plan_persists() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "movable".to_string(),
                releases: releases(&[(2024, 1, 1), (2024, 1, 2), (2024, 1, 3)], 4),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    let moved = console
        .reschedule_plan(
            "default",
            &MovePlan {
                id: plan.id,
                start: date(2024, 1, 5),
            },
        )
        .await
        .expect("Failed to reschedule");

    let dates: Vec<_> = moved.releases.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 5), date(2024, 1, 6), date(2024, 1, 7)]
    );

    // The shift is durable, not just returned.
    let reloaded = console
        .get_plan("default", &Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan missing");
    assert_eq!(reloaded.releases, moved.releases);
}

#[tokio::test]
async fn test_timeline_reflects_reschedule() {
    let (_temp_dir, console) = create_test_console().await;

    let plan = console
        .create_plan(
            "default",
            &CreatePlan {
                name: "bar".to_string(),
                releases: releases(&[(2024, 1, 1), (2024, 1, 2)], 1),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    console
        .reschedule_plan(
            "default",
            &MovePlan {
                id: plan.id,
                start: date(2024, 1, 4),
            },
        )
        .await
        .expect("Failed to reschedule");

    let timeline = console
        .timeline_at("default", date(2024, 1, 4))
        .await
        .expect("Failed to build timeline");

    assert_eq!(timeline.columns.first().map(|c| c.date), Some(date(2024, 1, 4)));
    assert_eq!(timeline.rects.len(), 1);
    assert_eq!(timeline.rects[0].col_start, 0);
    assert_eq!(timeline.rects[0].col_span, 2);
    assert_eq!(timeline.today_column, Some(0));
}

#[tokio::test]
async fn test_timeline_empty_shop() {
    let (_temp_dir, console) = create_test_console().await;

    let timeline = console
        .timeline_at("default", date(2024, 1, 1))
        .await
        .expect("Failed to build timeline");
    assert!(timeline.is_empty());
    assert!(timeline.columns.is_empty());
}

#[tokio::test]
async fn test_compare_between_dates() {
    let (_temp_dir, console) = create_test_console().await;

    console
        .create_plan(
            "default",
            &CreatePlan {
                name: "ramping".to_string(),
                releases: vec![
                    ReleaseEntry::new(date(2024, 1, 1), 3),
                    ReleaseEntry::new(date(2024, 1, 2), 9),
                ],
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create plan");

    let report = console
        .compare(
            "default",
            &Compare {
                before: date(2024, 1, 1),
                after: date(2024, 1, 2),
            },
        )
        .await
        .expect("Failed to compare");

    assert_eq!(report.changes.len(), 1);
    assert!(matches!(
        &report.changes[0],
        DiffChange::Increased { label, delta } if label == "ramping" && *delta == 6
    ));
}
