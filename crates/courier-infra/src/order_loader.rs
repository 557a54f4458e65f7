//! Order request loader (TOML)

use std::fs;
use std::path::Path;

use courier_domain::model::OrderRequest;
use courier_types::{Error, Result};

/// Load an order request from a TOML file
pub fn load_order_from_file(path: &Path) -> Result<OrderRequest> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::OrderFile(format!("Failed to read order file {}: {}", path.display(), e))
    })?;
    load_order_from_str(&content)
}

/// Parse an order request from TOML
pub fn load_order_from_str(toml_content: &str) -> Result<OrderRequest> {
    toml::from_str(toml_content)
        .map_err(|e| Error::OrderFile(format!("Failed to parse order TOML: {}", e)))
}
