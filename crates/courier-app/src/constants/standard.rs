//! Standard price list used when no rate file is configured

use courier_domain::model::{Discount, ShippingRate, ShippingRates};
use courier_types::ParcelType;

/// (type, delivery cost, weight limit kg, overweight cost per kg)
const STANDARD_RATES: [(ParcelType, f64, f64, f64); 5] = [
    (ParcelType::Small, 3.0, 1.0, 2.0),
    (ParcelType::Medium, 8.0, 3.0, 2.0),
    (ParcelType::Large, 15.0, 6.0, 2.0),
    (ParcelType::Xl, 25.0, 10.0, 2.0),
    (ParcelType::Heavy, 50.0, 50.0, 1.0),
];

/// (type, group size)
const STANDARD_DISCOUNTS: [(ParcelType, usize); 2] = [
    (ParcelType::Small, 4),
    (ParcelType::Medium, 3),
];

pub fn standard_rates() -> ShippingRates {
    STANDARD_RATES
        .iter()
        .map(|&(parcel_type, delivery_cost, weight_limit_kg, overweight_cost_per_kg)| ShippingRate {
            parcel_type,
            delivery_cost,
            weight_limit_kg,
            overweight_cost_per_kg,
        })
        .collect()
}

/// Small: every 4th free. Medium: every 3rd free.
pub fn standard_discounts() -> Vec<Discount> {
    STANDARD_DISCOUNTS
        .iter()
        .filter_map(|&(parcel_type, group)| Discount::every(parcel_type, group))
        .collect()
}
