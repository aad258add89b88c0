//! Vantage CLI
//!
//! Command-line interface for the Vantage risk engine.
//!
//! # Commands
//!
//! - `price`: Black-Scholes price and Greeks
//! - `bond`: Flat-yield bond analytics
//! - `bootstrap`: Build a discount curve from deposits and swaps
//! - `portfolio`: Value, P&L and Greeks of a book
//! - `var`: Parametric or historical Value at Risk
//! - `scenario`: Apply an ad hoc shock to a book
//! - `stress`: Run named stress presets
//! - `presets`: List the preset catalog with hashes

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::var::VarCommand;
use config::{CliConfig, OutputFormat};

/// Vantage - deterministic quant risk engine
#[derive(Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vantage.toml")]
    config: PathBuf,

    /// Output format, overriding the configuration (json, table)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and compute its Greeks
    Price {
        /// Spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Continuously compounded risk-free rate
        #[arg(long)]
        rate: f64,

        /// Volatility
        #[arg(long)]
        sigma: f64,

        /// Option type (call, put)
        #[arg(long, default_value = "call")]
        option_type: String,
    },

    /// Flat-yield bond PV, duration and convexity
    Bond {
        /// Face value
        #[arg(long, default_value_t = 1000.0)]
        face: f64,

        /// Annual coupon rate
        #[arg(long)]
        coupon: f64,

        /// Years to maturity
        #[arg(long)]
        years: f64,

        /// Yield to maturity
        #[arg(long = "yield")]
        yield_rate: f64,

        /// Coupon periods per year
        #[arg(long, default_value_t = 2)]
        periods_per_year: u32,
    },

    /// Bootstrap a discount curve from a JSON instrument list
    Bootstrap {
        /// Instrument file
        #[arg(short, long)]
        instruments: PathBuf,
    },

    /// Value a portfolio and aggregate its P&L and Greeks
    Portfolio {
        /// Portfolio file
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Named curves for curve-discounted bonds
        #[arg(long)]
        curves: Option<PathBuf>,
    },

    /// Value at Risk
    Var {
        #[command(subcommand)]
        method: VarCommand,
    },

    /// Apply an ad hoc shock to a portfolio
    Scenario {
        /// Portfolio file
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Shock file
        #[arg(short, long)]
        shock: PathBuf,

        /// Named curves for curve-discounted bonds
        #[arg(long)]
        curves: Option<PathBuf>,
    },

    /// Run named stress presets against a portfolio
    Stress {
        /// Portfolio file
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Preset identifier
        #[arg(long, conflicts_with = "all")]
        preset: Option<String>,

        /// Run every preset in the catalog
        #[arg(long)]
        all: bool,

        /// Named curves for curve-discounted bonds
        #[arg(long)]
        curves: Option<PathBuf>,
    },

    /// List stress presets with their hashes
    Presets,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config)?.with_env_override();
    config.validate()?;

    init_tracing(cli.verbose, &config.log_level);
    debug!(config = %cli.config.display(), "configuration loaded");

    let format = cli.format.unwrap_or(config.output_format);

    let report = match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            sigma,
            option_type,
        } => commands::price::run(spot, strike, expiry, rate, sigma, &option_type)?,
        Commands::Bond {
            face,
            coupon,
            years,
            yield_rate,
            periods_per_year,
        } => commands::bond::run(face, coupon, years, yield_rate, periods_per_year)?,
        Commands::Bootstrap { instruments } => commands::bootstrap::run(&instruments)?,
        Commands::Portfolio { portfolio, curves } => {
            commands::portfolio::run(&portfolio, curves.as_deref(), &config)?
        }
        Commands::Var { method } => commands::var::run(method, &config)?,
        Commands::Scenario {
            portfolio,
            shock,
            curves,
        } => commands::scenario::run(&portfolio, &shock, curves.as_deref(), &config)?,
        Commands::Stress {
            portfolio,
            preset,
            all,
            curves,
        } => commands::stress::run(&portfolio, preset.as_deref(), all, curves.as_deref(), &config)?,
        Commands::Presets => commands::presets::run()?,
    };

    println!("{}", output::render(&report, format)?);
    Ok(())
}
