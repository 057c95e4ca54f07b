//! Plan model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ReleaseEntry;

/// A named release schedule consisting of dated quantity entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan, assigned at creation and never reused
    pub id: u64,

    /// Merchant-facing model code
    #[serde(default)]
    pub code: String,

    /// Display name; also the matching key for day-over-day comparison
    pub name: String,

    /// SKU name shown on new-plan report lines
    #[serde(default)]
    pub sku_name: String,

    /// SKU price shown on new-plan report lines (free-form text)
    #[serde(default)]
    pub sku_price: String,

    /// Whether promotional photos were posted; `None` means unset
    #[serde(default)]
    pub posted: Option<bool>,

    /// Timestamp when the plan was created (UTC); the default sort key
    pub created_at: Timestamp,

    /// Ordered per-day release entries
    #[serde(default)]
    pub releases: Vec<ReleaseEntry>,
}

impl Plan {
    /// Earliest release date, if the plan has any releases.
    pub fn first_date(&self) -> Option<Date> {
        self.releases.iter().map(|r| r.date).min()
    }

    /// Latest release date, if the plan has any releases.
    pub fn last_date(&self) -> Option<Date> {
        self.releases.iter().map(|r| r.date).max()
    }

    /// Inclusive day count between the first and last release.
    ///
    /// Gap days with no entry still count toward the span; an empty plan
    /// spans zero days.
    pub fn span_days(&self) -> usize {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => {
                usize::try_from((last - first).get_days()).unwrap_or(0) + 1
            }
            _ => 0,
        }
    }

    /// Sum of quantities across all release entries.
    pub fn total_quantity(&self) -> u64 {
        self.releases.iter().map(|r| u64::from(r.quantity)).sum()
    }

    /// The tri-state posted flag collapsed for display: unset reads as false.
    pub fn is_posted(&self) -> bool {
        self.posted.unwrap_or(false)
    }
}
