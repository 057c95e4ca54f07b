//! Core library for the Cadence release planning application.
//!
//! This crate provides the core business logic for managing staggered
//! release plans per shop: the plan data model, the date-axis and timeline
//! layout engines, drag-based rescheduling, day-over-day diffing, and the
//! persistence layer.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting (collections, timelines, operation results)
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{ConsoleBuilder, params::CreatePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a console instance
//! let console = ConsoleBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a new plan
//! let create_params = CreatePlan {
//!     name: "Spring launch".to_string(),
//!     ..Default::default()
//! };
//! let plan = console.create_plan("default", &create_params).await?;
//! println!("Created plan: {}", plan);
//!
//! // Draw the shop timeline
//! let timeline = console.timeline("default").await?;
//! println!("{} bars", timeline.rects.len());
//! # Ok(())
//! # }
//! ```

pub mod axis;
pub mod console;
pub mod diff;
pub mod display;
pub mod drag;
pub mod error;
pub mod layout;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use axis::{build_axis, column_index, weekday_name, DateColumn};
pub use console::{Console, ConsoleBuilder};
pub use diff::{diff, ComparePreset, DiffChange, DiffReport};
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, PlanSummaries, TimelineView,
    UpdateResult,
};
pub use drag::{DragOutcome, DragState, DRAG_THRESHOLD};
pub use error::{ConsoleError, Result};
pub use layout::{layout, LayoutConfig, LayoutRect, Timeline};
pub use models::{Plan, PlanSummary, ReleaseEntry};
pub use params::{Compare, CreatePlan, DeletePlan, Id, MovePlan, SetPosted, UpdatePlan};
pub use store::{MemoryStore, PlanStore, SqliteStore};
