//! Itemforge CLI - deterministic item-definition pipeline
//!
//! Usage: itemforge <COMMAND>
//!
//! Commands:
//!   load  Resolve a content directory and register its items
//!   id    Print the deterministic internal id for external ids

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

use itemforge::application::{LoadOptions, LoadUseCase};
use itemforge::config::{self, Config, Verbosity};
use itemforge::domain::ports::{LoadEventSink, NoopEventSink};
use itemforge::domain::value_objects::InternalId;
use itemforge::infrastructure::cloning::InMemoryItemTable;
use itemforge::infrastructure::events::{ConsoleEventSink, JsonEventSink};
use itemforge::infrastructure::fs::LocalFs;
use itemforge::infrastructure::repositories::{
    FsDefinitionRepository, FsLocaleSource, FsManifestSource,
};

/// Itemforge - deterministic item-definition pipeline
#[derive(Parser, Debug)]
#[command(name = "itemforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit NDJSON events instead of console lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a content directory and register its items
    Load {
        /// Content root (holds db/items, db/locales, bundles.json)
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Override the asset manifest path
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Dry run - resolve everything, register nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the deterministic internal id for external ids
    Id {
        /// External ids to hash
        #[arg(required = true)]
        external_ids: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Load {
            source,
            manifest,
            dry_run,
        } => run_load(&source, manifest, dry_run, cli.json),
        Commands::Id { external_ids } => {
            for external_id in &external_ids {
                println!("{}  {}", InternalId::from_external(external_id), external_id);
            }
            Ok(true)
        }
    }
}

fn load_config(source: &PathBuf) -> Result<Config> {
    let config_path = source.join(config::CONFIG_FILE);
    let config = if config_path.exists() {
        let (config, warnings) = Config::load_with_warnings(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        for warning in &warnings {
            eprintln!(
                "warning: unknown key `{}` in {}",
                warning.key,
                warning.file.display()
            );
        }
        config
    } else {
        Config::default()
    };
    Ok(config::with_env_overrides(config))
}

fn run_load(source: &PathBuf, manifest: Option<PathBuf>, dry_run: bool, json: bool) -> Result<bool> {
    let mut config = load_config(source)?.resolved_against(source);
    if let Some(manifest) = manifest {
        config.paths.manifest = manifest;
    }

    let use_case = LoadUseCase::new(
        FsDefinitionRepository::new(LocalFs::new()),
        FsManifestSource::new(LocalFs::new(), config.paths.manifest.clone()),
        FsLocaleSource::new(LocalFs::new(), config.paths.locales_dir.clone()),
    );

    // NDJSON when asked for, or when stdout is piped somewhere.
    let sink: Arc<dyn LoadEventSink> = if json || !std::io::stdout().is_terminal() {
        Arc::new(JsonEventSink::stdout())
    } else {
        match config.output.verbosity {
            Verbosity::Quiet => Arc::new(NoopEventSink),
            Verbosity::Normal => Arc::new(ConsoleEventSink::stderr()),
            Verbosity::Verbose => Arc::new(ConsoleEventSink::stderr().verbose(true)),
        }
    };

    let options = LoadOptions::new(config.paths.items_dir.clone())
        .with_dry_run(dry_run)
        .with_fallback_template(config.constants.fallback_template.clone())
        .with_default_asset(config.constants.default_asset.clone());

    // The CLI has no live host database; it registers into an in-memory
    // table so duplicate ids and resolution problems surface before a real
    // deployment.
    let mut table = InMemoryItemTable::new();
    let result = use_case.execute_with_events(&mut table, &options, sink);

    if !json {
        println!(
            "{} registered, {} skipped, {} warning(s), {} error(s)",
            result.registered.len(),
            result.skipped.len(),
            result.warnings.len(),
            result.errors.len()
        );
    }

    Ok(result.is_success())
}
