//! Builder for creating and configuring Console instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Console;
use crate::{
    error::{ConsoleError, Result},
    layout::LayoutConfig,
    store::{PlanStore, SqliteStore},
};

/// Builder for creating and configuring Console instances.
#[derive(Default)]
pub struct ConsoleBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn PlanStore>>,
    layout: Option<LayoutConfig>,
}

impl ConsoleBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cadence/cadence.db` or
    /// `~/.local/share/cadence/cadence.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already-constructed store instead of opening a database.
    ///
    /// Takes precedence over [`Self::with_database_path`]. Mainly useful for
    /// embedding and tests.
    pub fn with_store(mut self, store: Arc<dyn PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Overrides the timeline layout geometry.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Builds the configured console instance.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::FileSystem` if the database path is invalid
    /// Returns `ConsoleError::Store` if database initialization fails
    pub async fn build(self) -> Result<Console> {
        let layout = self.layout.unwrap_or_default();

        if let Some(store) = self.store {
            return Ok(Console::new(store, layout));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConsoleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = task::spawn_blocking(move || SqliteStore::new(&db_path))
            .await
            .map_err(|e| ConsoleError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Console::new(Arc::new(store), layout))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .place_data_file("cadence.db")
            .map_err(|e| ConsoleError::XdgDirectory(e.to_string()))
    }
}
