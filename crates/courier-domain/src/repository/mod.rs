//! Rate provider trait definitions

use courier_types::Result;

use crate::model::ShippingRates;

/// Source of the shipping rate table
pub trait ShippingRateProvider {
    /// Load the full rate table
    fn shipping_rates(&self) -> Result<ShippingRates>;
}

/// Provider over a rate table already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    rates: ShippingRates,
}

impl StaticRateProvider {
    pub fn new(rates: ShippingRates) -> Self {
        Self { rates }
    }
}

impl ShippingRateProvider for StaticRateProvider {
    fn shipping_rates(&self) -> Result<ShippingRates> {
        Ok(self.rates.clone())
    }
}
