//! File-backed implementations of the domain provider traits

mod file_rate_provider;

pub use file_rate_provider::FileRateProvider;
