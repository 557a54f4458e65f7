//! Parcel pricing domain: classification, rate lookup, discounts and order totals

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{ShippingRateProvider, StaticRateProvider};
pub use service::{classify, process_order, ParcelFactory};
