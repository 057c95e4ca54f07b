//! Plan store: persistence boundary for per-shop plan lists.
//!
//! The store is an injected abstraction so the layout, reschedule and diff
//! engines can be exercised against plain data without a database. A shop
//! that was never saved loads as an empty list (first use); save failures
//! surface as [`crate::ConsoleError::Store`] and are never retried
//! automatically; the in-memory list stays the session's source of truth.

use crate::error::Result;
use crate::models::Plan;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Load/save access to the ordered plan list of a shop.
pub trait PlanStore: Send + Sync {
    /// Loads the plan list for a shop; an unknown shop is an empty list.
    fn load(&self, shop: &str) -> Result<Vec<Plan>>;

    /// Replaces the stored plan list for a shop.
    fn save(&self, shop: &str, plans: &[Plan]) -> Result<()>;
}
