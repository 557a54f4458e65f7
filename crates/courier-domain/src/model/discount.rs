//! "One free parcel per N" discount groups

use std::num::NonZeroUsize;

use courier_types::ParcelType;
use serde::{Deserialize, Serialize};

use super::Parcel;

/// Every `group`-th cheapest parcel of `parcel_type` ships free
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub parcel_type: ParcelType,
    pub group: NonZeroUsize,
}

impl Discount {
    pub fn new(parcel_type: ParcelType, group: NonZeroUsize) -> Self {
        Self { parcel_type, group }
    }

    /// Returns `None` for a zero group size
    pub fn every(parcel_type: ParcelType, group: usize) -> Option<Self> {
        NonZeroUsize::new(group).map(|group| Self::new(parcel_type, group))
    }

    /// Parcels that ship free under this discount
    ///
    /// Matching parcels are stable-sorted by total cost and the ones at
    /// index 0, N, 2N, ... are taken, one per complete group of N.
    pub fn discounted<'a>(&self, parcels: &'a [Parcel]) -> Vec<&'a Parcel> {
        let mut matching: Vec<&Parcel> = parcels
            .iter()
            .filter(|p| p.parcel_type() == self.parcel_type)
            .collect();
        matching.sort_by(|a, b| a.total_cost().total_cmp(&b.total_cost()));

        let group = self.group.get();
        let free_count = matching.len() / group;
        matching.into_iter().step_by(group).take(free_count).collect()
    }

    /// Sum of the costs this discount waives
    pub fn calculate(&self, parcels: &[Parcel]) -> f64 {
        self.discounted(parcels)
            .into_iter()
            .map(Parcel::total_cost)
            .fold(0.0, |acc, cost| acc + cost)
    }
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} parcels: 1 free per {}", self.parcel_type, self.group)
    }
}

/// Sum of every discount, each applied against the full parcel list
pub fn total_discount(discounts: &[Discount], parcels: &[Parcel]) -> f64 {
    discounts
        .iter()
        .map(|d| d.calculate(parcels))
        .fold(0.0, |acc, amount| acc + amount)
}
