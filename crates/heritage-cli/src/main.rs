//! Heritage Watch CLI - Command-line interface over a heritage site dataset.

use clap::Parser;
use heritage_cli::commands;
use heritage_cli::dataset;
use heritage_cli::{Cli, Command, Config, Formatter};
use heritage_domain::MetricsConfig;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> heritage_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config: an explicit path must exist, the default path may not.
    // init-config writes the file, so it starts from defaults.
    let config = match (&cli.config, &cli.command) {
        (_, Command::InitConfig(_)) => Config::default(),
        (Some(path), _) => Config::load_from(path)?,
        (None, _) => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {}", e);
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let metrics = cli
        .reference_year
        .map(MetricsConfig::with_reference_year)
        .unwrap_or_else(|| config.metrics_config());

    let output = match cli.command {
        Command::ParseYear(args) => commands::execute_parse_year(&args, &formatter)?,
        Command::InitConfig(args) => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::path()?,
            };
            commands::execute_init_config(&args, &path, &formatter)?
        }
        cmd => {
            // Commands that require a dataset
            let path = dataset::resolve_path(cli.data, config.settings.data_path.as_deref())?;
            let sites = dataset::load_sites(&path)?;

            match cmd {
                Command::List(args) => commands::execute_list(&args, &sites, &metrics, &formatter)?,
                Command::Report(args) => {
                    commands::execute_report(&args, &sites, &metrics, &formatter)?
                }
                Command::Show(args) => commands::execute_show(&args, &sites, &metrics, &formatter)?,
                Command::ParseYear(_) | Command::InitConfig(_) => unreachable!(),
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
