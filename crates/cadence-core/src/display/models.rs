//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, separated from the
//! model definitions to keep data and presentation apart.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::axis::weekday_name;
use crate::models::{Plan, PlanSummary, ReleaseEntry};

fn posted_label(posted: Option<bool>) -> &'static str {
    match posted {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unset",
    }
}

impl fmt::Display for ReleaseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.date,
            weekday_name(self.date),
            self.quantity
        )?;
        if !self.remark.trim().is_empty() {
            write!(f, " ({})", self.remark)?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        if !self.code.is_empty() {
            writeln!(f, "- Code: {}", self.code)?;
        }
        if !self.sku_name.is_empty() {
            writeln!(f, "- SKU: {}", self.sku_name)?;
        }
        if !self.sku_price.is_empty() {
            writeln!(f, "- Price: {}", self.sku_price)?;
        }
        writeln!(f, "- Posted: {}", posted_label(self.posted))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.releases.is_empty() {
            writeln!(f, "\nNo releases in this plan.")?;
        } else {
            writeln!(f, "\n## Releases ({} total)", self.total_quantity())?;
            writeln!(f)?;
            for release in &self.releases {
                writeln!(f, "- {release}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if !self.code.is_empty() {
            writeln!(f, "- **Code**: {}", self.code)?;
        }
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => writeln!(
                f,
                "- **Schedule**: {first} .. {last} ({} entries, {} units)",
                self.release_count, self.total_quantity
            )?,
            _ => writeln!(f, "- **Schedule**: empty")?,
        }
        if self.posted {
            writeln!(f, "- **Posted**: yes")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}
