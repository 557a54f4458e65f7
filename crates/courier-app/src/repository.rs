//! Rate provider adapters

use std::path::PathBuf;

use courier_domain::repository::{ShippingRateProvider, StaticRateProvider};
use courier_domain::service::ParcelFactory;
use courier_infra::persistence::FileRateProvider;
use courier_types::Result;

use crate::config::Config;
use crate::constants::standard_rates;

/// Open the rate provider for this run
///
/// An explicit path wins over the configured one; with neither, the
/// built-in standard rates are used.
pub fn open_rate_provider(
    config: &Config,
    rates_path: Option<PathBuf>,
) -> Box<dyn ShippingRateProvider> {
    match rates_path.or_else(|| config.rates_path.clone()) {
        Some(path) => Box::new(FileRateProvider::new(path)),
        None => Box::new(StaticRateProvider::new(standard_rates())),
    }
}

/// Build a parcel factory over the rate table for this run
pub fn open_parcel_factory(config: &Config, rates_path: Option<PathBuf>) -> Result<ParcelFactory> {
    let provider = open_rate_provider(config, rates_path);
    ParcelFactory::from_provider(provider.as_ref())
}
