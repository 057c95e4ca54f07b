//! Display formatting functions and result types.
//!
//! This module provides wrapper types for operation results and collection
//! views, enabling consistent markdown formatting across output contexts
//! (lists, timelines, diff reports, operation confirmations).
//!
//! Display implementations live on the domain models where the model alone
//! determines its rendering, and on newtype wrappers where the context does
//! (collections, operation results, timeline views).
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, TimelineView)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, TimelineView};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
