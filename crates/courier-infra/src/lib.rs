//! Infrastructure layer - rate table and order file loaders

pub mod order_loader;
pub mod persistence;
pub mod rate_table_loader;
