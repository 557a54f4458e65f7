//! Built-in rate table and discounts

pub mod standard;

pub use standard::{standard_discounts, standard_rates};
