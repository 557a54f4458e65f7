//! Domain model types

pub mod dimensions;
pub mod discount;
pub mod order;
pub mod parcel;
pub mod request;
pub mod shipping_rate;

pub use dimensions::Dimensions;
pub use discount::{total_discount, Discount};
pub use order::Order;
pub use parcel::Parcel;
pub use request::{OrderRequest, ParcelRequest};
pub use shipping_rate::{ShippingRate, ShippingRates};
