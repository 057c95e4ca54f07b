//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::layout::Timeline;
use crate::models::{Plan, PlanSummary};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Provides clean Display formatting for plan collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}

/// Character cell width of one timeline column.
const CELL: usize = 5;

/// Textual rendering of a timeline against the plan list it was built from.
///
/// Each axis column becomes a fixed-width cell; each plan bar becomes a row
/// of filled cells labeled with the plan name. The layout engine's pixel
/// geometry is not used here, only rows, column starts and spans.
pub struct TimelineView<'a> {
    pub timeline: &'a Timeline,
    pub plans: &'a [Plan],
}

impl<'a> TimelineView<'a> {
    pub fn new(timeline: &'a Timeline, plans: &'a [Plan]) -> Self {
        Self { timeline, plans }
    }

    fn label_for(&self, plan_id: u64) -> String {
        match self.plans.iter().find(|p| p.id == plan_id) {
            Some(plan) => format!("{} ({} units)", plan.name, plan.total_quantity()),
            None => format!("plan {plan_id}"),
        }
    }

    fn row(f: &mut fmt::Formatter<'_>, cells: impl Iterator<Item = String>) -> fmt::Result {
        write!(f, "|")?;
        for cell in cells {
            write!(f, "{cell:^CELL$}|")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.timeline;
        let (Some(first), Some(last)) = (
            timeline.columns.first().map(|c| c.date),
            timeline.columns.last().map(|c| c.date),
        ) else {
            return writeln!(f, "No plans to draw.");
        };

        writeln!(f, "# Timeline: {first} .. {last}")?;
        writeln!(f)?;

        writeln!(f, "```")?;
        Self::row(
            f,
            timeline
                .columns
                .iter()
                .map(|c| format!("{:02}-{:02}", c.date.month(), c.date.day())),
        )?;
        writeln!(f)?;
        Self::row(
            f,
            timeline
                .columns
                .iter()
                .map(|c| crate::axis::weekday_name(c.date).to_string()),
        )?;
        writeln!(f)?;

        if let Some(today) = timeline.today_column {
            Self::row(
                f,
                (0..timeline.columns.len())
                    .map(|i| if i == today { "*" } else { "" }.to_string()),
            )?;
            writeln!(f, " today")?;
        }

        for rect in &timeline.rects {
            let bar_range = rect.col_start..rect.col_start + rect.col_span;
            Self::row(
                f,
                (0..timeline.columns.len()).map(|i| {
                    if bar_range.contains(&i) {
                        "#".repeat(CELL)
                    } else {
                        String::new()
                    }
                }),
            )?;
            writeln!(f, " {}", self.label_for(rect.plan_id))?;
        }
        writeln!(f, "```")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::axis::build_axis;
    use crate::layout::{layout, LayoutConfig};
    use crate::models::ReleaseEntry;

    fn test_plan(id: u64, name: &str, dates: &[(i16, i8, i8)]) -> Plan {
        Plan {
            id,
            code: String::new(),
            name: name.to_string(),
            sku_name: String::new(),
            sku_price: String::new(),
            posted: None,
            created_at: Timestamp::from_second(1_700_000_000 + id as i64).unwrap(),
            releases: dates
                .iter()
                .map(|&(y, m, d)| ReleaseEntry::new(date(y, m, d), 2))
                .collect(),
        }
    }

    #[test]
    fn test_plan_summaries_display() {
        let plans = vec![
            PlanSummary::from(&test_plan(1, "First Plan", &[(2024, 1, 1)])),
            PlanSummary::from(&test_plan(2, "Second Plan", &[])),
        ];
        let summaries = PlanSummaries(plans);
        let output = format!("{}", summaries);
        assert!(output.contains("## First Plan (ID: 1)"));
        assert!(output.contains("## Second Plan (ID: 2)"));
        assert!(output.contains("**Schedule**: empty"));

        let empty = PlanSummaries(vec![]);
        assert_eq!(format!("{}", empty), "No plans found.\n");
    }

    #[test]
    fn test_timeline_view_bars_and_marker() {
        let plans = vec![
            test_plan(1, "wide", &[(2024, 1, 1), (2024, 1, 3)]),
            test_plan(2, "narrow", &[(2024, 1, 2)]),
        ];
        let timeline = layout(
            &plans,
            build_axis(&plans),
            date(2024, 1, 2),
            &LayoutConfig::default(),
        );
        let output = format!("{}", TimelineView::new(&timeline, &plans));

        assert!(output.contains("# Timeline: 2024-01-01 .. 2024-01-03"));
        assert!(output.contains("|01-01|01-02|01-03|"));
        assert!(output.contains("| Mon | Tue | Wed |"));
        assert!(output.contains("|     |  *  |     | today"));
        // Newest first: "narrow" (id 2) renders above "wide".
        let narrow_row = "|     |#####|     | narrow (2 units)";
        let wide_row = "|#####|#####|#####| wide (4 units)";
        assert!(output.contains(narrow_row));
        assert!(output.contains(wide_row));
        let narrow_at = output.find(narrow_row).unwrap();
        let wide_at = output.find(wide_row).unwrap();
        assert!(narrow_at < wide_at);
    }

    #[test]
    fn test_timeline_view_empty() {
        let timeline = Timeline::empty();
        let output = format!("{}", TimelineView::new(&timeline, &[]));
        assert_eq!(output, "No plans to draw.\n");
    }
}
