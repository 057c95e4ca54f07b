//! Compact plan projection for list views.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Summary information about a plan for table/list display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub sku_name: String,
    pub sku_price: String,
    pub posted: bool,
    pub created_at: Timestamp,
    /// Number of release entries
    pub release_count: usize,
    /// Sum of quantities across all entries
    pub total_quantity: u64,
    pub first_date: Option<Date>,
    pub last_date: Option<Date>,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            code: plan.code.clone(),
            name: plan.name.clone(),
            sku_name: plan.sku_name.clone(),
            sku_price: plan.sku_price.clone(),
            posted: plan.is_posted(),
            created_at: plan.created_at,
            release_count: plan.releases.len(),
            total_quantity: plan.total_quantity(),
            first_date: plan.first_date(),
            last_date: plan.last_date(),
        }
    }
}
