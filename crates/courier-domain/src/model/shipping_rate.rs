//! Shipping rate reference data

use std::collections::HashMap;

use courier_types::{Error, ParcelType, Result};
use serde::{Deserialize, Serialize};

/// Price list entry for one parcel type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub parcel_type: ParcelType,
    /// Flat delivery cost
    pub delivery_cost: f64,
    /// Weight included in the delivery cost
    pub weight_limit_kg: f64,
    /// Charge per kg above the limit
    pub overweight_cost_per_kg: f64,
}

impl ShippingRate {
    /// Surcharge for a parcel of the given weight: max(0, weight - limit) × cost per kg
    pub fn overweight_cost(&self, weight_kg: f64) -> f64 {
        if weight_kg > self.weight_limit_kg {
            (weight_kg - self.weight_limit_kg) * self.overweight_cost_per_kg
        } else {
            0.0
        }
    }
}

/// Rate table keyed by parcel type
///
/// Built once from a provider's list and not modified afterwards. When the
/// list carries more than one entry for a type, the first entry is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingRates {
    rates: HashMap<ParcelType, ShippingRate>,
}

impl ShippingRates {
    pub fn new(rates: impl IntoIterator<Item = ShippingRate>) -> Self {
        let mut table = HashMap::new();
        for rate in rates {
            if table.contains_key(&rate.parcel_type) {
                tracing::warn!(parcel_type = %rate.parcel_type, "duplicate shipping rate ignored");
                continue;
            }
            table.insert(rate.parcel_type, rate);
        }
        Self { rates: table }
    }

    /// Look up the rate for a parcel type
    pub fn get(&self, parcel_type: ParcelType) -> Option<&ShippingRate> {
        self.rates.get(&parcel_type)
    }

    /// Look up the rate for a parcel type, failing when the table has none
    pub fn rate_for(&self, parcel_type: ParcelType) -> Result<&ShippingRate> {
        self.get(parcel_type)
            .ok_or(Error::MissingRate(parcel_type))
    }

    /// All entries ordered by parcel type
    pub fn all(&self) -> Vec<&ShippingRate> {
        let mut rates: Vec<&ShippingRate> = self.rates.values().collect();
        rates.sort_by_key(|r| r.parcel_type);
        rates
    }

    /// Parcel types the table cannot price
    pub fn missing_types(&self) -> Vec<ParcelType> {
        ParcelType::ALL
            .into_iter()
            .filter(|t| !self.rates.contains_key(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<ShippingRate> for ShippingRates {
    fn from_iter<I: IntoIterator<Item = ShippingRate>>(iter: I) -> Self {
        Self::new(iter)
    }
}
