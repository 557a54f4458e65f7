//! File-based implementation of ShippingRateProvider

use std::path::{Path, PathBuf};

use courier_domain::model::ShippingRates;
use courier_domain::repository::ShippingRateProvider;
use courier_types::Result;

use crate::rate_table_loader::load_rates_from_file;

/// Rate table read from a TOML or CSV file on each request
#[derive(Debug, Clone)]
pub struct FileRateProvider {
    path: PathBuf,
}

impl FileRateProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShippingRateProvider for FileRateProvider {
    fn shipping_rates(&self) -> Result<ShippingRates> {
        load_rates_from_file(&self.path)
    }
}
