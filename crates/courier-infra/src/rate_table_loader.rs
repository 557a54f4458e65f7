//! Shipping rate table loader (TOML or CSV)

use std::fs;
use std::io::Read;
use std::path::Path;

use courier_domain::model::{ShippingRate, ShippingRates};
use courier_types::{Error, Result};
use serde::Deserialize;

/// Container for parsing rates.toml
#[derive(Debug, Deserialize)]
struct RateTableConfig {
    rates: Vec<ShippingRate>,
}

/// Load a rate table, picking the format from the file extension
///
/// `.csv` files are read as CSV, everything else as TOML.
pub fn load_rates_from_file(path: &Path) -> Result<ShippingRates> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let rates = if is_csv {
        let file = fs::File::open(path).map_err(|e| {
            Error::RateTable(format!("Failed to open rate file {}: {}", path.display(), e))
        })?;
        load_rates_from_csv(file)?
    } else {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::RateTable(format!("Failed to read rate file {}: {}", path.display(), e))
        })?;
        load_rates_from_toml_str(&content)?
    };

    tracing::info!(path = %path.display(), entries = rates.len(), "loaded shipping rates");
    Ok(rates)
}

/// Load a rate table from TOML with a `[[rates]]` array
pub fn load_rates_from_toml_str(toml_content: &str) -> Result<ShippingRates> {
    let config: RateTableConfig = toml::from_str(toml_content)
        .map_err(|e| Error::RateTable(format!("Failed to parse rate table TOML: {}", e)))?;
    Ok(ShippingRates::new(config.rates))
}

/// Load a rate table from CSV
///
/// Expected header: parcel_type, delivery_cost, weight_limit_kg, overweight_cost_per_kg
pub fn load_rates_from_csv<R: Read>(reader: R) -> Result<ShippingRates> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rates = Vec::new();
    for (index, record) in csv_reader.deserialize::<ShippingRate>().enumerate() {
        let rate = record.map_err(|e| {
            Error::RateTable(format!("Invalid rate on CSV row {}: {}", index + 1, e))
        })?;
        rates.push(rate);
    }
    Ok(ShippingRates::new(rates))
}
