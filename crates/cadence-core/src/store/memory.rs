//! In-memory plan store for tests and embedding.

use std::collections::HashMap;
use std::sync::Mutex;

use super::PlanStore;
use crate::error::{ConsoleError, Result};
use crate::models::Plan;

/// Plan store holding everything in a mutex-guarded map.
#[derive(Default)]
pub struct MemoryStore {
    shops: Mutex<HashMap<String, Vec<Plan>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> ConsoleError {
    ConsoleError::Configuration {
        message: "memory store mutex poisoned".to_string(),
    }
}

impl PlanStore for MemoryStore {
    fn load(&self, shop: &str) -> Result<Vec<Plan>> {
        let shops = self.shops.lock().map_err(|_| poisoned())?;
        Ok(shops.get(shop).cloned().unwrap_or_default())
    }

    fn save(&self, shop: &str, plans: &[Plan]) -> Result<()> {
        let mut shops = self.shops.lock().map_err(|_| poisoned())?;
        shops.insert(shop.to_string(), plans.to_vec());
        Ok(())
    }
}
