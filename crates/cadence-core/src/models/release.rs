//! Release entry model: one calendar day's quantity commitment.

use jiff::civil::Date;
use jiff::Span;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// One day's release within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseEntry {
    /// Calendar date of the release (no time of day)
    pub date: Date,

    /// Units released that day
    pub quantity: u32,

    /// Free-text label; display label and diff matching key
    #[serde(default)]
    pub remark: String,
}

impl ReleaseEntry {
    /// Creates an entry with an empty remark.
    pub fn new(date: Date, quantity: u32) -> Self {
        Self {
            date,
            quantity,
            remark: String::new(),
        }
    }

    /// Expands a contiguous date range plus per-day quantities into entries.
    ///
    /// The quantity list must contain exactly one value per day in the
    /// inclusive `[start, end]` range. Used for batch initialization of a
    /// plan's release schedule.
    pub fn series(start: Date, end: Date, quantities: &[u32]) -> Result<Vec<ReleaseEntry>> {
        if end < start {
            return Err(ConsoleError::invalid_input("end")
                .with_reason("end date must not be earlier than start date"));
        }

        let days = usize::try_from((end - start).get_days()).unwrap_or(0) + 1;
        if quantities.len() != days {
            return Err(ConsoleError::invalid_input("quantities").with_reason(format!(
                "expected {days} quantities for {start}..{end}, got {}",
                quantities.len()
            )));
        }

        let mut entries = Vec::with_capacity(days);
        for (i, &quantity) in quantities.iter().enumerate() {
            let date = start
                .checked_add(Span::new().days(i as i64))
                .map_err(|e| {
                    ConsoleError::invalid_input("start").with_reason(format!("date overflow: {e}"))
                })?;
            entries.push(ReleaseEntry::new(date, quantity));
        }
        Ok(entries)
    }
}
