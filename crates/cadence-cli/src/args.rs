//! Command-line argument definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and converts into the matching `cadence_core::params` type, so core types
//! stay free of clap attributes and the mapping is verified at compile time.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cadence_core::params::{Compare, CreatePlan, DeletePlan, Id, MovePlan, SetPosted, UpdatePlan};
use cadence_core::{ComparePreset, ReleaseEntry};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;

/// Main command-line interface for the Cadence release planning console
///
/// Cadence manages staggered release plans per shop: each plan is a named
/// schedule of dated quantity releases, drawn as bars on a shared date
/// axis. The CLI covers plan management, the shop timeline, and
/// day-over-day release comparison.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Shop whose plans the command operates on
    #[arg(long, global = true, default_value = "default")]
    pub shop: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
///
/// The CLI is organized into three main command categories:
/// - `plan`: Operations for managing release plans (add, edit, move, etc.)
/// - `timeline`: Draw the shop's plans against the shared date axis
/// - `diff`: Compare the releases of two dates
#[derive(Subcommand)]
pub enum Commands {
    /// Manage release plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Draw the shop timeline
    #[command(alias = "t")]
    Timeline(TimelineArgs),
    /// Compare the releases of two dates
    #[command(alias = "d")]
    Diff(DiffArgs),
}

/// Plan management subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Add a new plan
    #[command(alias = "a")]
    Add(AddPlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Edit an existing plan
    #[command(alias = "e")]
    Edit(EditPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Duplicate a plan under a marked name
    #[command(alias = "cp")]
    Copy(PlanIdArgs),
    /// Set or clear the posted flag
    Posted(PostedArgs),
    /// Move a plan to a new start date, preserving its duration
    #[command(alias = "mv")]
    Move(MovePlanArgs),
}

/// Parses a comma-separated quantity list such as "3,5,2".
fn parse_quantities(text: &str) -> Result<Vec<u32>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid quantity '{}'", part.trim()))
        })
        .collect()
}

/// Builds a release schedule from the optional schedule flags.
///
/// `--start` opens an inclusive date range (`--end` defaults to the start
/// date) and `--quantities` supplies one value per day; days default to
/// zero when quantities are omitted. `--remark` is stamped on every
/// generated entry.
fn build_releases(
    start: Option<Date>,
    end: Option<Date>,
    quantities: Option<&str>,
    remark: Option<&str>,
) -> Result<Option<Vec<ReleaseEntry>>> {
    let Some(start) = start else {
        if end.is_some() || quantities.is_some() || remark.is_some() {
            bail!("--end, --quantities and --remark require --start");
        }
        return Ok(None);
    };

    let end = end.unwrap_or(start);
    let quantities = match quantities {
        Some(text) => parse_quantities(text)?,
        None => {
            let days = usize::try_from((end - start).get_days())
                .context("--end must not be earlier than --start")?
                + 1;
            vec![0; days]
        }
    };
    let mut entries = ReleaseEntry::series(start, end, &quantities)?;
    if let Some(remark) = remark {
        for entry in &mut entries {
            entry.remark = remark.to_string();
        }
    }
    Ok(Some(entries))
}

/// Add a new plan
#[derive(ClapArgs)]
pub struct AddPlanArgs {
    /// Name of the plan; also the matching key for diffs
    pub name: String,
    /// Merchant-facing model code
    #[arg(long)]
    pub code: Option<String>,
    /// SKU name shown on new-plan report lines
    #[arg(long)]
    pub sku_name: Option<String>,
    /// SKU price shown on new-plan report lines
    #[arg(long)]
    pub sku_price: Option<String>,
    /// First release date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<Date>,
    /// Last release date; defaults to the start date
    #[arg(long)]
    pub end: Option<Date>,
    /// Comma-separated per-day quantities, one per day in the range
    #[arg(long)]
    pub quantities: Option<String>,
    /// Remark stamped on every generated release entry
    #[arg(long)]
    pub remark: Option<String>,
}

impl AddPlanArgs {
    /// Convert CLI arguments to core parameter structure.
    pub fn into_params(self) -> Result<CreatePlan> {
        let releases = build_releases(
            self.start,
            self.end,
            self.quantities.as_deref(),
            self.remark.as_deref(),
        )?
        .unwrap_or_default();
        Ok(CreatePlan {
            name: self.name,
            code: self.code,
            sku_name: self.sku_name,
            sku_price: self.sku_price,
            releases,
        })
    }
}

/// Identify a plan by its ID
#[derive(ClapArgs)]
pub struct PlanIdArgs {
    /// Unique identifier of the plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit an existing plan
///
/// Only the provided flags change; `--start`/`--end`/`--quantities`
/// replace the whole release schedule when given.
#[derive(ClapArgs)]
pub struct EditPlanArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// New plan name
    #[arg(long)]
    pub name: Option<String>,
    /// New model code
    #[arg(long)]
    pub code: Option<String>,
    /// New SKU name
    #[arg(long)]
    pub sku_name: Option<String>,
    /// New SKU price
    #[arg(long)]
    pub sku_price: Option<String>,
    /// First release date of the replacement schedule
    #[arg(long)]
    pub start: Option<Date>,
    /// Last release date of the replacement schedule
    #[arg(long)]
    pub end: Option<Date>,
    /// Comma-separated per-day quantities for the replacement schedule
    #[arg(long)]
    pub quantities: Option<String>,
    /// Remark stamped on every replacement entry
    #[arg(long)]
    pub remark: Option<String>,
}

impl EditPlanArgs {
    /// Convert CLI arguments to core parameter structure.
    pub fn into_params(self) -> Result<UpdatePlan> {
        let releases = build_releases(
            self.start,
            self.end,
            self.quantities.as_deref(),
            self.remark.as_deref(),
        )?;
        Ok(UpdatePlan {
            id: self.id,
            name: self.name,
            code: self.code,
            sku_name: self.sku_name,
            sku_price: self.sku_price,
            releases,
        })
    }
}

/// Delete a plan permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// Confirm the deletion; without this flag nothing is removed
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Posted flag states accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
pub enum PostedState {
    Yes,
    No,
    Unset,
}

/// Set or clear the posted flag
#[derive(ClapArgs)]
pub struct PostedArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// New flag state
    #[arg(value_enum)]
    pub state: PostedState,
}

impl From<PostedArgs> for SetPosted {
    fn from(val: PostedArgs) -> Self {
        SetPosted {
            id: val.id,
            posted: match val.state {
                PostedState::Yes => Some(true),
                PostedState::No => Some(false),
                PostedState::Unset => None,
            },
        }
    }
}

/// Move a plan to a new start date
#[derive(ClapArgs)]
pub struct MovePlanArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// New first release date (YYYY-MM-DD)
    pub start: Date,
}

impl From<MovePlanArgs> for MovePlan {
    fn from(val: MovePlanArgs) -> Self {
        MovePlan {
            id: val.id,
            start: val.start,
        }
    }
}

/// Draw the shop timeline
#[derive(ClapArgs, Default)]
pub struct TimelineArgs {
    /// Override the date treated as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<Date>,
}

/// Named comparison presets
#[derive(Clone, Copy, ValueEnum)]
pub enum DiffPreset {
    /// Compare today against tomorrow
    TodayTomorrow,
    /// Compare yesterday against today
    YesterdayToday,
}

impl From<DiffPreset> for ComparePreset {
    fn from(val: DiffPreset) -> Self {
        match val {
            DiffPreset::TodayTomorrow => ComparePreset::TodayTomorrow,
            DiffPreset::YesterdayToday => ComparePreset::YesterdayToday,
        }
    }
}

/// Compare the releases of two dates
#[derive(ClapArgs)]
pub struct DiffArgs {
    /// Named preset resolved against the local date
    #[arg(value_enum, conflicts_with_all = ["from", "to"])]
    pub preset: Option<DiffPreset>,
    /// Explicit earlier date (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<Date>,
    /// Explicit later date (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<Date>,
}

/// Resolved form of the diff arguments.
pub enum DiffSelection {
    Preset(ComparePreset),
    Explicit(Compare),
}

impl DiffArgs {
    /// Resolves the preset/explicit flag combination.
    pub fn selection(self) -> DiffSelection {
        match (self.from, self.to) {
            (Some(before), Some(after)) => DiffSelection::Explicit(Compare { before, after }),
            _ => DiffSelection::Preset(
                self.preset.unwrap_or(DiffPreset::TodayTomorrow).into(),
            ),
        }
    }
}
