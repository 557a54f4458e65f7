//! CLI definition using clap

use clap::{Parser, Subcommand};
use courier_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "courier-quote")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Parcel shipping cost calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Rate table file (TOML or CSV). Uses config value if not specified.
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug log, including the order breakdown)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price an order file
    Quote {
        /// Path to order TOML file
        order: PathBuf,

        /// Request speedy shipping (overrides the order file)
        #[arg(long)]
        speedy: bool,

        /// Skip the standard discounts (overrides config)
        #[arg(long)]
        no_discounts: bool,
    },

    /// Classify and price a single parcel
    Classify {
        /// Length in cm
        #[arg(long, short = 'l')]
        length: f64,

        /// Width in cm
        #[arg(long, short = 'w')]
        width: f64,

        /// Height in cm
        #[arg(long = "height", short = 'H')]
        height: f64,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Show the rate table in use
    Rates,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default rate table file
        #[arg(long)]
        rates_path: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Apply standard discounts by default (true/false)
        #[arg(long)]
        standard_discounts: Option<bool>,

        /// Reset to default configuration
        #[arg(long)]
        reset: bool,
    },
}
