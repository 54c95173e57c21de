//! Init-config command implementation.

use crate::cli::InitConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init-config command.
///
/// Writes the default configuration to `path`. An existing file is only
/// replaced with `--force`.
pub fn execute_init_config(
    args: &InitConfigArgs,
    path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    if path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Wrote default config");

    Ok(formatter.info(&format!("Wrote {}", path.display())))
}
