//! Show command implementation.

use crate::cli::ShowArgs;
use crate::dataset::find_site;
use crate::error::Result;
use crate::output::Formatter;
use heritage_domain::{MetricsConfig, Site, SiteMetrics};

/// Execute the show command.
pub fn execute_show(
    args: &ShowArgs,
    sites: &[Site],
    config: &MetricsConfig,
    formatter: &Formatter,
) -> Result<String> {
    let site = find_site(sites, &args.id)?;
    let metrics = SiteMetrics::compute(site, config);
    formatter.format_site(site, &metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use heritage_domain::{SiteStatus, SiteType};

    #[test]
    fn test_show_known_and_unknown_site() {
        let sites = vec![Site::new("a", "Alpha", SiteType::Museum, SiteStatus::Damaged)];
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let config = MetricsConfig::default();

        let args = ShowArgs { id: "a".to_string() };
        assert_eq!(execute_show(&args, &sites, &config, &formatter).unwrap(), "160");

        let args = ShowArgs { id: "z".to_string() };
        assert!(matches!(
            execute_show(&args, &sites, &config, &formatter),
            Err(CliError::SiteNotFound(_))
        ));
    }
}
