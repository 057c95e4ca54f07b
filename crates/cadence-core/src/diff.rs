//! Day-over-day plan diff engine.
//!
//! Compares release quantities and remarks between two calendar days and
//! classifies every plan into change categories for a copy-pasteable text
//! report. Plans are keyed by *name*, not id: merchants reuse model names
//! across recreated plans, so two same-named plans are one comparison
//! subject. That can silently merge unrelated plans sharing a display name;
//! it is the intended domain rule, not a defect.

use std::collections::HashMap;
use std::fmt;

use jiff::civil::Date;

use crate::models::Plan;

/// The two built-in comparison windows of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparePreset {
    TodayTomorrow,
    YesterdayToday,
}

impl ComparePreset {
    /// Resolves the preset to a (before, after) date pair.
    pub fn dates(self, today: Date) -> (Date, Date) {
        match self {
            ComparePreset::TodayTomorrow => {
                (today, today.tomorrow().unwrap_or(today))
            }
            ComparePreset::YesterdayToday => {
                (today.yesterday().unwrap_or(today), today)
            }
        }
    }
}

/// A plan's state on one of the two compared days.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DayEntry {
    quantity: u32,
    remark: String,
    sku_name: String,
    sku_price: String,
}

impl DayEntry {
    /// The implicit entry for a plan absent on a date.
    fn zero() -> Self {
        Self {
            quantity: 0,
            remark: String::new(),
            sku_name: String::new(),
            sku_price: String::new(),
        }
    }
}

/// One classified change in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffChange {
    /// Nothing before, something after
    New {
        label: String,
        quantity: u32,
        sku_name: String,
        sku_price: String,
    },
    Increased { label: String, delta: u32 },
    Decreased { label: String, delta: u32 },
    Stopped { label: String },
    /// Secondary category, additive to a primary one
    RemarkChanged { old: String, new: String },
}

/// Categorized comparison of plan volumes between two days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub shop: String,
    pub before: Date,
    pub after: Date,
    pub changes: Vec<DiffChange>,
    /// Distinct comparison subjects present on either day
    pub subjects: usize,
}

/// Compares every plan's releases between `before` and `after`.
///
/// Chronological order of the two dates is not enforced; the caller may
/// compare yesterday to today or today to tomorrow. The report is fully
/// deterministic for a given plan list: subjects appear in first-appearance
/// order and classification is pure.
pub fn diff(shop: &str, plans: &[Plan], before: Date, after: Date) -> DiffReport {
    // Subject order is the order names first appear while walking the plan
    // list; a later same-named entry overwrites the day slot but keeps the
    // original position.
    let mut names: Vec<String> = Vec::new();
    let mut before_map: HashMap<String, DayEntry> = HashMap::new();
    let mut after_map: HashMap<String, DayEntry> = HashMap::new();

    for plan in plans {
        for release in &plan.releases {
            let is_before = if release.date == before {
                true
            } else if release.date == after {
                false
            } else {
                continue;
            };

            let remark = match release.remark.trim() {
                "" => plan.name.clone(),
                trimmed => trimmed.to_string(),
            };
            let entry = DayEntry {
                quantity: release.quantity,
                remark,
                sku_name: plan.sku_name.clone(),
                sku_price: plan.sku_price.clone(),
            };

            if !before_map.contains_key(&plan.name) && !after_map.contains_key(&plan.name) {
                names.push(plan.name.clone());
            }
            let slot = if is_before {
                &mut before_map
            } else {
                &mut after_map
            };
            slot.insert(plan.name.clone(), entry);
        }
    }

    let mut changes = Vec::new();
    for name in &names {
        let before_entry = before_map.get(name).cloned().unwrap_or_else(DayEntry::zero);
        let after_entry = after_map.get(name).cloned().unwrap_or_else(DayEntry::zero);

        let label_of = |entry: &DayEntry| -> String {
            match entry.remark.trim() {
                "" => name.clone(),
                trimmed => trimmed.to_string(),
            }
        };

        let is_new = before_entry.quantity == 0 && after_entry.quantity > 0;

        // Primary classification, first match wins.
        if is_new {
            changes.push(DiffChange::New {
                label: label_of(&after_entry),
                quantity: after_entry.quantity,
                sku_name: after_entry.sku_name.clone(),
                sku_price: after_entry.sku_price.clone(),
            });
        } else if after_entry.quantity > before_entry.quantity && before_entry.quantity > 0 {
            changes.push(DiffChange::Increased {
                label: label_of(&before_entry),
                delta: after_entry.quantity - before_entry.quantity,
            });
        } else if after_entry.quantity < before_entry.quantity && after_entry.quantity > 0 {
            changes.push(DiffChange::Decreased {
                label: label_of(&before_entry),
                delta: before_entry.quantity - after_entry.quantity,
            });
        } else if before_entry.quantity > 0 && after_entry.quantity == 0 {
            changes.push(DiffChange::Stopped {
                label: label_of(&before_entry),
            });
        }

        // Secondary, additive category: the wording changed while the plan
        // keeps releasing.
        if !is_new
            && after_entry.quantity > 0
            && !before_entry.remark.trim().is_empty()
            && !after_entry.remark.trim().is_empty()
            && before_entry.remark != after_entry.remark
        {
            changes.push(DiffChange::RemarkChanged {
                old: before_entry.remark.clone(),
                new: after_entry.remark.clone(),
            });
        }
    }

    DiffReport {
        shop: shop.to_string(),
        before,
        after,
        changes,
        subjects: names.len(),
    }
}

impl DiffReport {
    fn section<I: Iterator<Item = String>>(
        f: &mut fmt::Formatter<'_>,
        header: &str,
        mut lines: I,
    ) -> fmt::Result {
        let Some(first) = lines.next() else {
            return Ok(());
        };
        writeln!(f, "## {header}")?;
        writeln!(f, "{first}")?;
        for line in lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} releases: {} vs {}",
            self.shop, self.before, self.after
        )?;
        writeln!(f)?;

        if self.subjects == 0 {
            writeln!(f, "No release plans on either day.")?;
            return Ok(());
        }
        if self.changes.is_empty() {
            writeln!(f, "No changes between the two days.")?;
            return Ok(());
        }

        Self::section(
            f,
            "New",
            self.changes.iter().filter_map(|c| match c {
                DiffChange::New {
                    label,
                    quantity,
                    sku_name,
                    sku_price,
                } => {
                    let sku = if sku_name.is_empty() {
                        String::new()
                    } else {
                        format!(" ({sku_name})")
                    };
                    Some(format!("- {label} x {quantity}  {sku_price}*1{sku}"))
                }
                _ => None,
            }),
        )?;
        Self::section(
            f,
            "Increased",
            self.changes.iter().filter_map(|c| match c {
                DiffChange::Increased { label, delta } => Some(format!("- {label}: +{delta}")),
                _ => None,
            }),
        )?;
        Self::section(
            f,
            "Decreased",
            self.changes.iter().filter_map(|c| match c {
                DiffChange::Decreased { label, delta } => Some(format!("- {label}: -{delta}")),
                _ => None,
            }),
        )?;
        Self::section(
            f,
            "Stopped",
            self.changes.iter().filter_map(|c| match c {
                DiffChange::Stopped { label } => Some(format!("- {label}: stopped")),
                _ => None,
            }),
        )?;
        Self::section(
            f,
            "Reworded",
            self.changes.iter().filter_map(|c| match c {
                DiffChange::RemarkChanged { old, new } => Some(format!("- {old} -> {new}")),
                _ => None,
            }),
        )?;
        Ok(())
    }
}
