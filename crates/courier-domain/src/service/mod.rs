//! Domain services

pub mod order_manager;
pub mod parcel_factory;

pub use order_manager::process_order;
pub use parcel_factory::{classify, ParcelFactory};
