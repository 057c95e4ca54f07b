//! Diff operations for the Console.

use std::sync::Arc;

use jiff::Zoned;
use tokio::task;

use super::Console;
use crate::{
    diff::{diff, ComparePreset, DiffReport},
    error::{ConsoleError, Result},
    params::Compare,
};

impl Console {
    /// Compares the releases of two explicit dates for a shop.
    pub async fn compare(&self, shop: &str, params: &Compare) -> Result<DiffReport> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let params = *params;

        task::spawn_blocking(move || {
            let plans = store.load(&shop)?;
            Ok(diff(&shop, &plans, params.before, params.after))
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Compares using a named preset resolved against the local date.
    pub async fn compare_preset(&self, shop: &str, preset: ComparePreset) -> Result<DiffReport> {
        let (before, after) = preset.dates(Zoned::now().date());
        self.compare(shop, &Compare { before, after }).await
    }
}
