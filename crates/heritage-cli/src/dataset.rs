//! Site dataset loading.

use crate::error::{CliError, Result};
use heritage_domain::Site;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Pick the dataset path: the command line wins over the config file.
pub fn resolve_path(cli_path: Option<PathBuf>, config_path: Option<&Path>) -> Result<PathBuf> {
    cli_path
        .or_else(|| config_path.map(Path::to_path_buf))
        .ok_or_else(|| {
            CliError::Dataset(
                "No dataset given. Pass --data <PATH> or set settings.data_path in the config file."
                    .to_string(),
            )
        })
}

/// Load a JSON array of site records.
pub fn load_sites(path: &Path) -> Result<Vec<Site>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::Dataset(format!("Failed to read {}: {}", path.display(), e)))?;
    let sites = parse_sites(&contents)?;

    tracing::info!(path = %path.display(), sites = sites.len(), "Loaded site dataset");
    Ok(sites)
}

/// Parse a JSON array of site records.
///
/// Duplicate IDs are kept as-is but logged, since `show` resolves to the
/// first match.
pub fn parse_sites(json: &str) -> Result<Vec<Site>> {
    let sites: Vec<Site> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for site in &sites {
        if !seen.insert(site.id.as_str()) {
            tracing::warn!(id = %site.id, "Duplicate site ID in dataset");
        }
    }

    Ok(sites)
}

/// Find a site by ID.
pub fn find_site<'a>(sites: &'a [Site], id: &str) -> Result<&'a Site> {
    sites
        .iter()
        .find(|site| site.id == id)
        .ok_or_else(|| CliError::SiteNotFound(id.to_string()))
}
