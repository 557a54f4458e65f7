//! Priced parcel

use courier_types::ParcelType;
use serde::Serialize;

use super::ShippingRate;

/// A classified parcel with its costs
///
/// Costs are always taken from a [`ShippingRate`]; there is no way to set
/// them directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parcel {
    parcel_type: ParcelType,
    weight_kg: f64,
    delivery_cost: f64,
    overweight_cost: f64,
}

impl Parcel {
    /// Price a parcel of `weight_kg` under the given rate
    pub fn priced(rate: &ShippingRate, weight_kg: f64) -> Self {
        Self {
            parcel_type: rate.parcel_type,
            weight_kg,
            delivery_cost: rate.delivery_cost,
            overweight_cost: rate.overweight_cost(weight_kg),
        }
    }

    pub fn parcel_type(&self) -> ParcelType {
        self.parcel_type
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn delivery_cost(&self) -> f64 {
        self.delivery_cost
    }

    pub fn overweight_cost(&self) -> f64 {
        self.overweight_cost
    }

    pub fn total_cost(&self) -> f64 {
        self.delivery_cost + self.overweight_cost
    }
}
