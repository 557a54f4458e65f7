//! Command handlers

use std::path::PathBuf;

use courier_app::app::{apply_speedy_override, order_discounts, quote_order};
use courier_app::config::Config;
use courier_app::repository::open_parcel_factory;
use courier_domain::model::Dimensions;
use courier_infra::order_loader::load_order_from_file;
use courier_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_parcel, output_quote, output_rates};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Quote {
            order,
            speedy,
            no_discounts,
        } => cmd_quote(&config, cli.rates, format, order, speedy, no_discounts),
        Commands::Classify {
            length,
            width,
            height,
            weight,
        } => cmd_classify(
            &config,
            cli.rates,
            format,
            Dimensions::new(length, width, height),
            weight,
        ),
        Commands::Rates => cmd_rates(&config, cli.rates, format),
        Commands::Config {
            show,
            rates_path,
            set_format,
            standard_discounts,
            reset,
        } => cmd_config(config, show, rates_path, set_format, standard_discounts, reset),
    }
}

fn cmd_quote(
    config: &Config,
    rates: Option<PathBuf>,
    format: OutputFormat,
    order: PathBuf,
    speedy: bool,
    no_discounts: bool,
) -> Result<()> {
    let factory = open_parcel_factory(config, rates)?;
    let mut request = load_order_from_file(&order)?;
    tracing::debug!(order = %order.display(), parcels = request.parcels.len(), "order loaded");
    apply_speedy_override(&mut request, speedy);

    let discounts = order_discounts(config, no_discounts);

    let quote = quote_order(&factory, &request, &discounts)?;
    output_quote(format, &quote)
}

fn cmd_classify(
    config: &Config,
    rates: Option<PathBuf>,
    format: OutputFormat,
    dimensions: Dimensions,
    weight: Option<f64>,
) -> Result<()> {
    let factory = open_parcel_factory(config, rates)?;
    let parcel = factory.build(dimensions, weight)?;
    output_parcel(format, &dimensions, &parcel)
}

fn cmd_rates(config: &Config, rates: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let factory = open_parcel_factory(config, rates)?;
    output_rates(format, factory.rates())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    rates_path: Option<PathBuf>,
    set_format: Option<OutputFormat>,
    standard_discounts: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;

    if let Some(path) = rates_path {
        config.rates_path = Some(path);
        changed = true;
    }

    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if let Some(enabled) = standard_discounts {
        config.standard_discounts = enabled;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
