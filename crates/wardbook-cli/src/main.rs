use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use wardbook_cli::{
    cli::{Cli, Commands, LogLevel},
    commands, config,
};
use wardbook_store::{FileKv, JsonRegistry, RegistryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = cli
        .log_level
        .map(LevelFilter::from)
        .unwrap_or(if cli.verbose {
            LevelFilter::from(LogLevel::Debug)
        } else {
            LevelFilter::WARN
        });
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration with CLI overrides
    let config = config::CliConfig::load(cli.config, cli.data_dir)?;

    let kv = FileKv::open(RegistryConfig::new(&config.registry.data_dir)).with_context(|| {
        format!(
            "failed to open data directory {}",
            config.registry.data_dir.display()
        )
    })?;
    let registry = JsonRegistry::new(kv);

    match cli.command {
        Commands::Cda { command } => commands::cda::run(&registry, cli.format, command),
        Commands::Street { command } => commands::street::run(&registry, cli.format, command),
        Commands::Property { command } => commands::property::run(&registry, cli.format, command),
        Commands::Dashboard => commands::dashboard::run(&registry, cli.format),
        Commands::Directory(args) => {
            commands::directory::run(&registry, cli.format, args, config.display.page_size)
        }
        Commands::Report { command } => commands::report::run(&registry, command),
        Commands::Prune => commands::maintenance::prune(&registry),
        Commands::Clear { yes } => commands::maintenance::clear(&registry, yes),
    }
}
