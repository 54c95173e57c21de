//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use heritage_domain::{filter_sites, sort_sites, MetricsConfig, Site, SortOrder};

/// Execute the list command.
pub fn execute_list(
    args: &ListArgs,
    sites: &[Site],
    config: &MetricsConfig,
    formatter: &Formatter,
) -> Result<String> {
    let state = args.filters.to_filter_state()?;
    let mut kept = filter_sites(sites, &state);

    let order = if args.desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    sort_sites(&mut kept, args.sort.into(), order, config);

    tracing::debug!(total = sites.len(), kept = kept.len(), "Listing sites");
    formatter.format_sites(&kept, config)
}
