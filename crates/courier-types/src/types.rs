//! Shared value types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Size class a parcel is charged under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelType {
    Small,
    Medium,
    Large,
    Xl,
    Heavy,
}

impl ParcelType {
    /// All parcel types, smallest band first
    pub const ALL: [ParcelType; 5] = [
        ParcelType::Small,
        ParcelType::Medium,
        ParcelType::Large,
        ParcelType::Xl,
        ParcelType::Heavy,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ParcelType::Small => "Small",
            ParcelType::Medium => "Medium",
            ParcelType::Large => "Large",
            ParcelType::Xl => "XL",
            ParcelType::Heavy => "Heavy",
        }
    }
}

impl std::fmt::Display for ParcelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Format an amount as US dollars, e.g. `$3.00`
pub fn format_usd(amount: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let amount = amount + 0.0;
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_type_serde_lowercase() {
        let json = serde_json::to_string(&ParcelType::Xl).unwrap();
        assert_eq!(json, "\"xl\"");
        let parsed: ParcelType = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(parsed, ParcelType::Heavy);
    }

    #[test]
    fn test_parcel_type_display() {
        assert_eq!(ParcelType::Small.to_string(), "Small");
        assert_eq!(ParcelType::Xl.to_string(), "XL");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(3.0), "$3.00");
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-1.25), "-$1.25");
        assert_eq!(format_usd(-0.0), "$0.00");
    }
}
