//! Order aggregation

use crate::model::{total_discount, Discount, Order, Parcel};

/// Apply discounts and speedy shipping to a list of priced parcels
///
/// Every discount is computed against the full parcel list and the results
/// are summed. Speedy shipping doubles the discounted subtotal.
pub fn process_order(parcels: Vec<Parcel>, is_speedy_shipping: bool, discounts: &[Discount]) -> Order {
    let discount = total_discount(discounts, &parcels);
    let order = Order::new(parcels, is_speedy_shipping, discount);

    tracing::debug!(
        parcels = order.parcels().len(),
        discount = order.discount(),
        speedy_shipping = order.speedy_shipping_cost(),
        total = order.total_cost(),
        "order processed"
    );
    order
}
