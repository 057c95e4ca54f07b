//! Command dispatch: wires parsed arguments to console operations.
//!
//! Each handler converts its CLI argument wrapper into core parameters,
//! invokes the console, and renders the display wrapper for the result
//! through the terminal renderer.

use anyhow::{Context, Result};
use cadence_core::{
    display::{CreateResult, DeleteResult, OperationStatus, PlanSummaries, UpdateResult},
    Console, TimelineView,
};

use crate::args::{DiffArgs, DiffSelection, PlanCommands, TimelineArgs};
use crate::renderer::TerminalRenderer;

/// CLI dispatcher holding the console and the output renderer.
pub struct Cli {
    console: Console,
    renderer: TerminalRenderer,
    shop: String,
}

impl Cli {
    pub fn new(console: Console, renderer: TerminalRenderer, shop: String) -> Self {
        Self {
            console,
            renderer,
            shop,
        }
    }

    /// Dispatches a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Add(args) => {
                let params = args.into_params()?;
                let plan = self
                    .console
                    .create_plan(&self.shop, &params)
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let params = args.into();
                match self
                    .console
                    .get_plan(&self.shop, &params)
                    .await
                    .context("Failed to load plan")?
                {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Plan with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
            PlanCommands::Edit(args) => {
                let params = args.into_params()?;
                let plan = self
                    .console
                    .update_plan(&self.shop, &params)
                    .await
                    .context("Failed to update plan")?;
                self.renderer.render(&UpdateResult::new(plan).to_string())
            }
            PlanCommands::Delete(args) => {
                let plan = self
                    .console
                    .delete_plan(&self.shop, &args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
            PlanCommands::Copy(args) => {
                let plan = self
                    .console
                    .copy_plan(&self.shop, &args.into())
                    .await
                    .context("Failed to copy plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::Posted(args) => {
                let plan = self
                    .console
                    .set_posted(&self.shop, &args.into())
                    .await
                    .context("Failed to set posted flag")?;
                self.renderer.render(&UpdateResult::new(plan).to_string())
            }
            PlanCommands::Move(args) => {
                let params = args.into();
                let plan = self
                    .console
                    .reschedule_plan(&self.shop, &params)
                    .await
                    .context("Failed to move plan")?;
                let changes = vec![format!("start date -> {}", params.start)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
        }
    }

    /// Lists all plans of the shop.
    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .console
            .list_plans(&self.shop)
            .await
            .context("Failed to list plans")?;
        let markdown = format!("# Plans\n\n{}", PlanSummaries(summaries));
        self.renderer.render(&markdown)
    }

    /// Draws the shop timeline.
    pub async fn timeline(&self, args: TimelineArgs) -> Result<()> {
        let plans = self
            .console
            .plans(&self.shop)
            .await
            .context("Failed to load plans")?;
        let timeline = match args.today {
            Some(today) => self.console.timeline_at(&self.shop, today).await,
            None => self.console.timeline(&self.shop).await,
        }
        .context("Failed to build timeline")?;
        self.renderer
            .render(&TimelineView::new(&timeline, &plans).to_string())
    }

    /// Compares the releases of two dates.
    pub async fn diff(&self, args: DiffArgs) -> Result<()> {
        let report = match args.selection() {
            DiffSelection::Preset(preset) => self.console.compare_preset(&self.shop, preset).await,
            DiffSelection::Explicit(params) => self.console.compare(&self.shop, &params).await,
        }
        .context("Failed to compare releases")?;
        self.renderer.render(&report.to_string())
    }
}
