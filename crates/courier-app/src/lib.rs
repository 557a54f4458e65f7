//! Application service layer - config, quoting, order logging

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
