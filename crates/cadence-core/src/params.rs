//! Parameter structures for console operations.
//!
//! Shared parameter types usable from any frontend (CLI today, others
//! later) without framework-specific derives. Interface layers define
//! their own argument wrappers and convert into these.

use jiff::civil::Date;

use crate::models::ReleaseEntry;

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default)]
pub struct CreatePlan {
    pub name: String,
    pub code: Option<String>,
    pub sku_name: Option<String>,
    pub sku_price: Option<String>,
    pub releases: Vec<ReleaseEntry>,
}

/// Parameters for partially updating an existing plan.
///
/// `None` fields are left untouched; `releases` replaces the whole
/// schedule when present.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlan {
    pub id: u64,
    pub name: Option<String>,
    pub code: Option<String>,
    pub sku_name: Option<String>,
    pub sku_price: Option<String>,
    pub releases: Option<Vec<ReleaseEntry>>,
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone)]
pub struct DeletePlan {
    pub id: u64,
    pub confirmed: bool,
}

/// Simple ID parameter for operations that only need a plan ID.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    pub id: u64,
}

/// Parameters for writing the tri-state posted flag.
///
/// `None` clears the flag back to unset.
#[derive(Debug, Clone, Copy)]
pub struct SetPosted {
    pub id: u64,
    pub posted: Option<bool>,
}

/// Parameters for rescheduling a plan to a new start date.
#[derive(Debug, Clone, Copy)]
pub struct MovePlan {
    pub id: u64,
    pub start: Date,
}

/// Parameters for an explicit two-date comparison.
#[derive(Debug, Clone, Copy)]
pub struct Compare {
    pub before: Date,
    pub after: Date,
}
