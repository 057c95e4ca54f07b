//! High-level console API for shop release planning.
//!
//! This module provides the main [`Console`] interface for interacting with
//! the Cadence release planning system. The console acts as the central
//! coordinator between the application layers and the plan store,
//! implementing all business logic for plan, timeline and diff operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Console     │    │    PlanStore    │
//! │ (CLI args and   │───▶│ (plan_ops,      │───▶│ (sqlite or      │
//! │  renderers)     │    │  timeline, diff)│    │  memory)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Console`] instances with configuration
//! - [`plan_ops`]: Plan CRUD, copy, posted flag and reschedule operations
//! - [`timeline_ops`]: Date-axis construction and timeline layout
//! - [`diff_ops`]: Two-day release comparison
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use cadence_core::{ConsoleBuilder, params::CreatePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let console = ConsoleBuilder::new().build().await?;
//!
//! let params = CreatePlan {
//!     name: "Spring launch".to_string(),
//!     ..Default::default()
//! };
//! let plan = console.create_plan("default", &params).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::layout::LayoutConfig;
use crate::store::PlanStore;

pub mod builder;
pub mod diff_ops;
pub mod plan_ops;
pub mod timeline_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::ConsoleBuilder;

/// Main console interface for managing plans, timelines and diffs.
pub struct Console {
    pub(crate) store: Arc<dyn PlanStore>,
    pub(crate) layout: LayoutConfig,
}

impl Console {
    /// Creates a new console over the given store.
    pub(crate) fn new(store: Arc<dyn PlanStore>, layout: LayoutConfig) -> Self {
        Self { store, layout }
    }

    /// Returns the layout configuration used for timelines.
    pub fn layout_config(&self) -> LayoutConfig {
        self.layout
    }
}
