//! Data models for release plans.
//!
//! This module contains the core domain models of the Cadence release
//! planning console. A [`Plan`] is a named schedule of dated quantity
//! releases; each day's commitment is a [`ReleaseEntry`]. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.

pub mod plan;
pub mod release;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use plan::Plan;
pub use release::ReleaseEntry;
pub use summary::PlanSummary;
