//! Parcel classification and cost loading

use courier_types::{ParcelType, Result};

use crate::model::{Dimensions, Parcel, ShippingRates};
use crate::repository::ShippingRateProvider;

/// Parcels heavier than this are Heavy whatever their size
pub const HEAVY_WEIGHT_THRESHOLD_KG: f64 = 50.0;

/// Upper bounds (exclusive) of the size bands, in cm
pub const SMALL_MAX_DIMENSION: f64 = 10.0;
pub const MEDIUM_MAX_DIMENSION: f64 = 50.0;
pub const LARGE_MAX_DIMENSION: f64 = 100.0;

/// Determine the parcel type from its largest side and weight
pub fn classify(dimensions: &Dimensions, weight_kg: f64) -> ParcelType {
    if weight_kg > HEAVY_WEIGHT_THRESHOLD_KG {
        return ParcelType::Heavy;
    }

    let largest = dimensions.largest();
    if largest < SMALL_MAX_DIMENSION {
        ParcelType::Small
    } else if largest < MEDIUM_MAX_DIMENSION {
        ParcelType::Medium
    } else if largest < LARGE_MAX_DIMENSION {
        ParcelType::Large
    } else {
        ParcelType::Xl
    }
}

/// Builds priced parcels against a fixed rate table
#[derive(Debug, Clone)]
pub struct ParcelFactory {
    rates: ShippingRates,
}

impl ParcelFactory {
    pub fn new(rates: ShippingRates) -> Self {
        Self { rates }
    }

    /// Fetch the rate table once from a provider
    pub fn from_provider<P: ShippingRateProvider + ?Sized>(provider: &P) -> Result<Self> {
        let rates = provider.shipping_rates()?;
        let missing = rates.missing_types();
        if !missing.is_empty() {
            tracing::warn!(?missing, "rate table does not cover every parcel type");
        }
        Ok(Self::new(rates))
    }

    pub fn rates(&self) -> &ShippingRates {
        &self.rates
    }

    /// Classify a parcel and load its costs
    ///
    /// A missing weight is treated as 0 kg. Fails with
    /// `Error::MissingRate` if the table has no entry for the type.
    pub fn build(&self, dimensions: Dimensions, weight_kg: Option<f64>) -> Result<Parcel> {
        let weight_kg = weight_kg.unwrap_or(0.0);
        let parcel_type = classify(&dimensions, weight_kg);
        let rate = self.rates.rate_for(parcel_type)?;
        let parcel = Parcel::priced(rate, weight_kg);

        tracing::debug!(
            %dimensions,
            weight_kg,
            parcel_type = %parcel_type,
            delivery_cost = parcel.delivery_cost(),
            overweight_cost = parcel.overweight_cost(),
            "parcel priced"
        );
        Ok(parcel)
    }
}
