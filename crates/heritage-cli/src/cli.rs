//! CLI command definitions and argument parsing.

use crate::error::{CliError, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use heritage_domain::{DateRange, FilterState, SiteStatus, SiteType, SortBy, YearRange};
use std::path::PathBuf;

/// Heritage Watch CLI - Inspect documented heritage sites and their losses.
#[derive(Debug, Parser)]
#[command(name = "heritage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Site dataset (JSON array of site records)
    #[arg(short, long, global = true, env = "HERITAGE_DATA")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Year ages are measured from
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub reference_year: Option<i32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs or bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List sites matching the filters
    List(ListArgs),

    /// Aggregate heritage value and integrity over matching sites
    Report(ReportArgs),

    /// Show one site with all of its metrics
    Show(ShowArgs),

    /// Parse free-text construction dates
    ParseYear(ParseYearArgs),

    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

/// Filter flags shared by list and report.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Keep only these site types (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Keep only these statuses (repeatable)
    #[arg(short, long = "status", value_enum)]
    pub statuses: Vec<StatusArg>,

    /// Earliest destruction date (YYYY-MM-DD)
    #[arg(long)]
    pub destroyed_from: Option<NaiveDate>,

    /// Latest destruction date (YYYY-MM-DD)
    #[arg(long)]
    pub destroyed_to: Option<NaiveDate>,

    /// Earliest construction year (negative = BCE)
    #[arg(long, allow_negative_numbers = true)]
    pub built_from: Option<i32>,

    /// Latest construction year (negative = BCE)
    #[arg(long, allow_negative_numbers = true)]
    pub built_to: Option<i32>,

    /// Search term matched against site names
    #[arg(short = 'q', long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Build the filter state these flags describe.
    ///
    /// Fails when a lower bound is after its upper bound.
    pub fn to_filter_state(&self) -> Result<FilterState> {
        if let (Some(from), Some(to)) = (self.destroyed_from, self.destroyed_to) {
            if from > to {
                return Err(CliError::InvalidInput(format!(
                    "--destroyed-from {} is after --destroyed-to {}",
                    from, to
                )));
            }
        }
        if let (Some(from), Some(to)) = (self.built_from, self.built_to) {
            if from > to {
                return Err(CliError::InvalidInput(format!(
                    "--built-from {} is after --built-to {}",
                    from, to
                )));
            }
        }

        Ok(FilterState {
            selected_types: self.types.iter().map(|t| SiteType::parse(t)).collect(),
            selected_statuses: self.statuses.iter().copied().map(Into::into).collect(),
            destruction_range: DateRange {
                start: self.destroyed_from,
                end: self.destroyed_to,
            },
            creation_range: YearRange {
                start: self.built_from,
                end: self.built_to,
            },
            search_term: self.search.clone().unwrap_or_default(),
        })
    }
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort key
    #[arg(long, value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Date to compute losses as of (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Site ID
    pub id: String,
}

/// Arguments for the parse-year command.
#[derive(Debug, Parser)]
pub struct ParseYearArgs {
    /// Construction dates to parse (e.g. "800 BCE", "circa 1200", "7th century")
    #[arg(required = true)]
    pub texts: Vec<String>,
}

/// Arguments for the init-config command.
#[derive(Debug, Parser)]
pub struct InitConfigArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Completely destroyed
    Destroyed,
    /// Structurally compromised
    HeavilyDamaged,
    /// Partially damaged
    Damaged,
}

/// Sort key argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortArg {
    /// Site name
    Name,
    /// Destruction date
    DateDestroyed,
    /// Parsed construction year
    YearBuilt,
    /// Glow contribution
    Glow,
    /// Significance score
    Significance,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StatusArg> for SiteStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Destroyed => SiteStatus::Destroyed,
            StatusArg::HeavilyDamaged => SiteStatus::HeavilyDamaged,
            StatusArg::Damaged => SiteStatus::Damaged,
        }
    }
}

impl From<SortArg> for SortBy {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Name => SortBy::Name,
            SortArg::DateDestroyed => SortBy::DateDestroyed,
            SortArg::YearBuilt => SortBy::YearBuilt,
            SortArg::Glow => SortBy::Glow,
            SortArg::Significance => SortBy::Significance,
        }
    }
}
