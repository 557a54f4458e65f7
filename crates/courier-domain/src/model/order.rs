//! Order totals

use super::Parcel;

/// A processed order
///
/// Built by [`crate::service::process_order`]; the discount is always the
/// sum computed from the order's own parcels.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    parcels: Vec<Parcel>,
    is_speedy_shipping: bool,
    discount: f64,
}

impl Order {
    pub(crate) fn new(parcels: Vec<Parcel>, is_speedy_shipping: bool, discount: f64) -> Self {
        Self {
            parcels,
            is_speedy_shipping,
            discount,
        }
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn is_speedy_shipping(&self) -> bool {
        self.is_speedy_shipping
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Sum of parcel costs before discounts
    pub fn parcels_cost(&self) -> f64 {
        self.parcels
            .iter()
            .map(Parcel::total_cost)
            .fold(0.0, |acc, cost| acc + cost)
    }

    /// Parcel costs minus discount, before speedy shipping
    pub fn subtotal(&self) -> f64 {
        self.parcels_cost() - self.discount
    }

    /// Amount payable; speedy shipping doubles the subtotal
    pub fn total_cost(&self) -> f64 {
        if self.is_speedy_shipping {
            2.0 * self.subtotal()
        } else {
            self.subtotal()
        }
    }

    /// Speedy shipping surcharge, half of the doubled total
    pub fn speedy_shipping_cost(&self) -> f64 {
        if self.is_speedy_shipping {
            self.total_cost() / 2.0
        } else {
            0.0
        }
    }
}
