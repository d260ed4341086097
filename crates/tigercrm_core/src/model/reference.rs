//! Read-only local-market reference data.
//!
//! These collections are written once by `crate::seed` and never mutated
//! afterwards. They carry no foreign keys.

use super::{Record, RecordId};
use crate::store::Collection;
use serde::{Deserialize, Serialize};

/// Ranked high-traffic retail location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStore {
    pub id: RecordId,
    pub rank: u32,
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub neighborhood: String,
}

/// Ranked residential neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: RecordId,
    pub rank: u32,
    /// Territory classification, `NEIGHBORHOOD` for every seeded row.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub zip: String,
    pub median_home: Option<f64>,
    pub features: String,
}

/// Ranked zip code with income profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCode {
    pub id: RecordId,
    pub rank: u32,
    pub name: String,
    pub zip: String,
    pub median_income: Option<f64>,
    pub avg_income: Option<f64>,
    /// Share of households earning over $200k, in percent.
    #[serde(rename = "pctOver200k")]
    pub pct_over_200k: Option<f64>,
    pub features: String,
}

impl Record for TopStore {
    const COLLECTION: Collection = Collection::Stores;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Neighborhood {
    const COLLECTION: Collection = Collection::Neighborhoods;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for ZipCode {
    const COLLECTION: Collection = Collection::ZipCodes;

    fn id(&self) -> RecordId {
        self.id
    }
}
