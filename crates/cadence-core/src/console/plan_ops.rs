//! Plan operations for the Console.

use std::sync::Arc;

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::Console;
use crate::{
    drag::reschedule,
    error::{ConsoleError, Result},
    models::{Plan, PlanSummary},
    params::{CreatePlan, DeletePlan, Id, MovePlan, SetPosted, UpdatePlan},
};

/// Picks an identifier from the current wall clock, bumping past any
/// value already taken in this shop.
fn next_plan_id(plans: &[Plan]) -> u64 {
    let millis = Timestamp::now().as_millisecond();
    let mut candidate = u64::try_from(millis).unwrap_or(0);
    while plans.iter().any(|p| p.id == candidate) {
        candidate += 1;
    }
    candidate
}

fn find_plan_mut(plans: &mut [Plan], id: u64) -> Result<&mut Plan> {
    plans
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(ConsoleError::PlanNotFound { id })
}

impl Console {
    /// Creates a new plan in the given shop.
    pub async fn create_plan(&self, shop: &str, params: &CreatePlan) -> Result<Plan> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let plan = Plan {
                id: next_plan_id(&plans),
                code: params.code.unwrap_or_default(),
                name: params.name,
                sku_name: params.sku_name.unwrap_or_default(),
                sku_price: params.sku_price.unwrap_or_default(),
                posted: None,
                created_at: Timestamp::now(),
                releases: params.releases,
            };
            plans.push(plan.clone());
            store.save(&shop, &plans)?;
            info!("Created plan {} ({})", plan.id, plan.name);
            Ok(plan)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Loads all plans of a shop, newest first.
    pub async fn plans(&self, shop: &str) -> Result<Vec<Plan>> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(plans)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all plans of a shop as summaries, newest first.
    pub async fn list_plans(&self, shop: &str) -> Result<Vec<PlanSummary>> {
        let plans = self.plans(shop).await?;
        Ok(plans.iter().map(PlanSummary::from).collect())
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, shop: &str, params: &Id) -> Result<Option<Plan>> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let plans = store.load(&shop)?;
            Ok(plans.into_iter().find(|p| p.id == plan_id))
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to a plan and returns the new state.
    pub async fn update_plan(&self, shop: &str, params: &UpdatePlan) -> Result<Plan> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let plan = find_plan_mut(&mut plans, params.id)?;
            if let Some(name) = params.name {
                plan.name = name;
            }
            if let Some(code) = params.code {
                plan.code = code;
            }
            if let Some(sku_name) = params.sku_name {
                plan.sku_name = sku_name;
            }
            if let Some(sku_price) = params.sku_price {
                plan.sku_price = sku_price;
            }
            if let Some(releases) = params.releases {
                plan.releases = releases;
            }
            let updated = plan.clone();
            store.save(&shop, &plans)?;
            Ok(updated)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a plan. The `confirmed` flag must be set; interfaces are
    /// expected to ask before calling.
    pub async fn delete_plan(&self, shop: &str, params: &DeletePlan) -> Result<Plan> {
        if !params.confirmed {
            return Err(ConsoleError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "deletion requires confirmation".to_string(),
            });
        }

        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let index = plans
                .iter()
                .position(|p| p.id == plan_id)
                .ok_or(ConsoleError::PlanNotFound { id: plan_id })?;
            let removed = plans.remove(index);
            store.save(&shop, &plans)?;
            info!("Deleted plan {} ({})", removed.id, removed.name);
            Ok(removed)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Duplicates a plan, giving the copy a fresh ID and a marked name.
    pub async fn copy_plan(&self, shop: &str, params: &Id) -> Result<Plan> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let original = plans
                .iter()
                .find(|p| p.id == plan_id)
                .ok_or(ConsoleError::PlanNotFound { id: plan_id })?;

            let mut copy = original.clone();
            copy.id = next_plan_id(&plans);
            copy.name = format!("{} (copy)", copy.name);
            copy.posted = None;
            copy.created_at = Timestamp::now();

            plans.push(copy.clone());
            store.save(&shop, &plans)?;
            Ok(copy)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Writes the tri-state posted flag of a plan.
    pub async fn set_posted(&self, shop: &str, params: &SetPosted) -> Result<Plan> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let params = *params;

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let plan = find_plan_mut(&mut plans, params.id)?;
            plan.posted = params.posted;
            let updated = plan.clone();
            store.save(&shop, &plans)?;
            Ok(updated)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Shifts a plan so its earliest release lands on the given date,
    /// preserving duration and per-day quantities.
    pub async fn reschedule_plan(&self, shop: &str, params: &MovePlan) -> Result<Plan> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let params = *params;

        task::spawn_blocking(move || {
            let mut plans = store.load(&shop)?;
            let plan = find_plan_mut(&mut plans, params.id)?;
            plan.releases = reschedule(&plan.releases, params.start)?;
            let updated = plan.clone();
            store.save(&shop, &plans)?;
            info!(
                "Rescheduled plan {} to start {}",
                updated.id, params.start
            );
            Ok(updated)
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
