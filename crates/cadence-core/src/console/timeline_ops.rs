//! Timeline operations for the Console.

use std::sync::Arc;

use jiff::civil::Date;
use jiff::Zoned;
use tokio::task;

use super::Console;
use crate::{
    axis::build_axis,
    error::{ConsoleError, Result},
    layout::{layout, Timeline},
};

impl Console {
    /// Builds the timeline for a shop against the local calendar date.
    pub async fn timeline(&self, shop: &str) -> Result<Timeline> {
        self.timeline_at(shop, Zoned::now().date()).await
    }

    /// Builds the timeline for a shop with an explicit "today".
    ///
    /// The axis spans from the earliest to the latest release date across
    /// all plans; the today marker is only set when `today` falls inside
    /// that span.
    pub async fn timeline_at(&self, shop: &str, today: Date) -> Result<Timeline> {
        let store = Arc::clone(&self.store);
        let shop = shop.to_string();
        let config = self.layout;

        task::spawn_blocking(move || {
            let plans = store.load(&shop)?;
            let columns = build_axis(&plans);
            Ok(layout(&plans, columns, today, &config))
        })
        .await
        .map_err(|e| ConsoleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
