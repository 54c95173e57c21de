//! Report command implementation.

use crate::cli::ReportArgs;
use crate::error::Result;
use crate::output::Formatter;
use heritage_domain::{filter_sites, HeritageReport, MetricsConfig, Site};

/// Execute the report command.
///
/// Aggregates are computed over the sites that pass the filters.
pub fn execute_report(
    args: &ReportArgs,
    sites: &[Site],
    config: &MetricsConfig,
    formatter: &Formatter,
) -> Result<String> {
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let state = args.filters.to_filter_state()?;
    let kept: Vec<Site> = filter_sites(sites, &state).into_iter().cloned().collect();

    let report = HeritageReport::compute(&kept, as_of, config);
    tracing::info!(
        as_of = %as_of,
        sites = report.site_count,
        integrity = report.integrity,
        "Computed report"
    );

    formatter.format_report(&report)
}
