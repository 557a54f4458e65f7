//! Order request input types

use serde::{Deserialize, Serialize};

use super::{Dimensions, Discount};

/// One parcel as submitted by the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl ParcelRequest {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}

/// A submitted order, before pricing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub speedy_shipping: bool,
    #[serde(default)]
    pub parcels: Vec<ParcelRequest>,
    /// Discounts granted to this order on top of any standard ones
    #[serde(default)]
    pub discounts: Vec<Discount>,
}
