//! CLI entry point for annparams.
//!
//! Loads layered settings, flattens them into the parameter record, and
//! resolves the record to typed index parameters through the registry.

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::collections::BTreeMap;
use std::ffi::c_int;
use std::path::{Path, PathBuf};
use tracing::debug;

use annparams::display::{
    THEME, create_algorithms_table, create_params_table, create_record_table,
};
use annparams::io::ExitCode;
use annparams::params::global_registry;
use annparams::{AlgorithmId, LogLevel, ParamsError, SearchParams, Settings};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Nearest-neighbor index parameter tool
#[derive(Parser)]
#[command(
    name = "annparams",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and resolve nearest-neighbor index parameters",
    long_about = "Load index settings, flatten them into the parameter record, and resolve the record to typed parameters for the selected algorithm.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Diagnostics verbosity: none, fatal, error, warn, info (overrides settings)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Write .annparams/settings.toml with default values")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings after file and environment layering")]
    Config,

    /// List registered algorithms
    #[command(about = "List algorithms known to the parameter registry")]
    Algorithms,

    /// Resolve settings to typed parameters
    #[command(
        about = "Resolve the active settings to typed index parameters",
        after_help = "Examples:\n  annparams show\n  annparams show --algorithm kmeans --checks 128\n  annparams show --algorithm 2 --record\n  annparams show --json | jq '.parameters'"
    )]
    Show {
        /// Algorithm name or numeric tag (overrides settings)
        #[arg(short, long)]
        algorithm: Option<AlgorithmId>,

        /// Leaves to check per query (overrides settings)
        #[arg(long)]
        checks: Option<c_int>,

        /// Also print every field of the flat record
        #[arg(long)]
        record: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        let params_error = err.downcast_ref::<ParamsError>();
        let code = params_error
            .map(ExitCode::from_error)
            .unwrap_or(ExitCode::GeneralError);

        eprintln!("{}", THEME.error_with_icon(&format!("{err:#}")));
        for suggestion in params_error
            .map(ParamsError::recovery_suggestions)
            .unwrap_or_default()
        {
            eprintln!("  {}", THEME.apply(&THEME.dim, suggestion));
        }
        eprintln!(
            "{}",
            THEME.apply(
                &THEME.dim,
                format!("exit {}: {}", i32::from(code), code.description())
            )
        );

        std::process::exit(code.into());
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        config,
        log_level,
        command,
    } = cli;

    if let Commands::Init { force } = command {
        init_logging(log_level.unwrap_or_default());
        let path = Settings::init_config_file(force)?;
        println!(
            "{}",
            THEME.success_with_icon(&format!("Created configuration at: {}", path.display()))
        );
        return Ok(());
    }

    let settings = load_settings(config.as_deref(), log_level)?;
    init_logging(settings.log_level);

    match command {
        Commands::Init { .. } => Ok(()),
        Commands::Config => {
            let rendered = toml::to_string_pretty(&settings).context("Rendering settings")?;
            println!("{}", THEME.apply(&THEME.header, "Active settings:"));
            print!("{rendered}");
            Ok(())
        }
        Commands::Algorithms => {
            println!("{}", create_algorithms_table(&global_registry().read()));
            Ok(())
        }
        Commands::Show {
            algorithm,
            checks,
            record,
            json,
        } => show(settings, algorithm, checks, record, json),
    }
}

fn load_settings(path: Option<&Path>, log_level: Option<LogLevel>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => Settings::load()?,
    };

    if let Some(level) = log_level {
        settings.log_level = level;
    }

    Ok(settings)
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(level.level_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn show(
    mut settings: Settings,
    algorithm: Option<AlgorithmId>,
    checks: Option<c_int>,
    print_record: bool,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(algorithm) = algorithm {
        debug!(%algorithm, "algorithm overridden on command line");
        settings.index.algorithm = algorithm;
    }
    if let Some(checks) = checks {
        debug!(checks, "checks overridden on command line");
        settings.search.checks = checks;
    }

    let record = settings.to_parameters();
    let params = global_registry().read().create_from_parameters(&record)?;
    let search = SearchParams::from_parameters(&record);
    params.print();

    if json {
        let parameters: BTreeMap<_, _> = params.describe().into_iter().collect();
        let output = serde_json::json!({
            "algorithm": params.index_type(),
            "parameters": parameters,
            "search": search,
            "record": record,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", create_params_table(params.as_ref(), search));
    if print_record {
        println!("{}", create_record_table(&record));
    }

    Ok(())
}
