//! Ratecard CLI - Weight-Bracket Quoting and Rate Table Maintenance
//!
//! This is the operational entry point for the rate card workspace.
//!
//! # Commands
//!
//! - `ratecard quote -m cumulative -o MNL -d CEB -w 75` - Price a shipment
//! - `ratecard models` - List pricing models and their active tables
//! - `ratecard limits show|add|set` - Inspect or edit bracket limits
//! - `ratecard table list|show|new|rename|delete|select` - Manage tables
//! - `ratecard route add|set|delete` - Edit route rows
//! - `ratecard rate set` - Edit a rate cell
//! - `ratecard export` / `ratecard import` - JSON snapshots
//!
//! # Architecture
//!
//! As the service layer, this crate loads the store file, applies one
//! command through `ratecard_store`, prices through `ratecard_pricing`, and
//! saves the store back when the command changed it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::limits::LimitsAction;
use commands::quote::QuoteArgs;
use commands::rate::RateAction;
use commands::route::RouteAction;
use commands::table::TableAction;
use commands::Session;
use config::{build_config, CliArgs};

/// Rate card quoting and table maintenance
#[derive(Parser)]
#[command(name = "ratecard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Store file path
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Currency used to format prices (PHP, USD, EUR, GBP, JPY)
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Volumetric divisor used when a quote gives none
    #[arg(long, global = true, value_name = "DIVISOR")]
    volume_divisor: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a shipment against the active table of a model
    Quote(QuoteArgs),

    /// List pricing models with their formulas and active tables
    Models,

    /// Inspect or edit the shared bracket limits
    Limits {
        #[command(subcommand)]
        action: LimitsAction,
    },

    /// Manage the tables of a model
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// Edit route rows of a model's active table
    Route {
        #[command(subcommand)]
        action: RouteAction,
    },

    /// Edit rate cells of a model's active table
    Rate {
        #[command(subcommand)]
        action: RateAction,
    },

    /// Write the store as a JSON snapshot
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a JSON snapshot into the store
    Import {
        /// Snapshot file
        input: PathBuf,
    },
}

impl Commands {
    /// Returns true if the command edits the store.
    fn mutates(&self) -> bool {
        match self {
            Commands::Quote(_) | Commands::Models | Commands::Export { .. } => false,
            Commands::Limits { action } => action.mutates(),
            Commands::Table { action } => action.mutates(),
            Commands::Route { .. } | Commands::Rate { .. } | Commands::Import { .. } => true,
        }
    }
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            store: cli.store.clone(),
            log_level,
            currency: cli.currency.clone(),
            volume_divisor: cli.volume_divisor,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli)).context("Failed to build configuration")?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        store = %config.store_path.display(),
        currency = %config.currency,
        volume_divisor = config.volume_divisor,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let store_path = config.store_path.clone();
    let mut session = Session::open(config)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;

    let mutates = cli.command.mutates();
    match cli.command {
        Commands::Quote(args) => commands::quote::run(&session, &args)?,
        Commands::Models => commands::models::run(&session),
        Commands::Limits { action } => commands::limits::run(&mut session, action)?,
        Commands::Table { action } => commands::table::run(&mut session, action)?,
        Commands::Route { action } => commands::route::run(&mut session, action)?,
        Commands::Rate { action } => commands::rate::run(&mut session, action)?,
        Commands::Export { output } => commands::transfer::export(&session, output.as_deref())?,
        Commands::Import { input } => commands::transfer::import(&mut session, &input)?,
    }

    if mutates {
        session
            .save()
            .with_context(|| format!("Failed to save store {}", store_path.display()))?;
        info!(store = %store_path.display(), "Store saved");
    }

    Ok(())
}
