//! Use cases

pub mod quote_service;

pub use quote_service::{
    apply_speedy_override, log_order, order_discounts, price_order, quote_order, Quote, QuoteLine,
};
