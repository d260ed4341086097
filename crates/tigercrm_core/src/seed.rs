//! One-time reference data seeding.
//!
//! # Invariants
//! - Runs at most once per storage lifetime, guarded by the seeded flag.
//! - Only reference collections are written; user collections are untouched.
//! - Seeded data is never refreshed once the flag is set.

use crate::model::reference::{Neighborhood, TopStore, ZipCode};
use crate::storage::{KeyValueStorage, StorageResult};
use crate::store::Store;
use log::info;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Reference collections were written during this call.
    Seeded,
    /// The flag was already present; nothing was written.
    AlreadySeeded,
}

/// Populates stores, neighborhoods and zip codes unless already seeded.
pub fn seed_reference_data<S: KeyValueStorage>(store: &Store<S>) -> StorageResult<SeedOutcome> {
    if store.is_seeded()? {
        info!("event=seed_reference module=seed status=skipped reason=already_seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let stores = top_stores();
    let neighborhoods = neighborhoods();
    let zip_codes = zip_codes();
    store.set(&stores)?;
    store.set(&neighborhoods)?;
    store.set(&zip_codes)?;
    store.mark_seeded()?;

    info!(
        "event=seed_reference module=seed status=ok stores={} neighborhoods={} zipcodes={}",
        stores.len(),
        neighborhoods.len(),
        zip_codes.len()
    );
    Ok(SeedOutcome::Seeded)
}

/// Ranked retail locations in the Auburn market.
pub fn top_stores() -> Vec<TopStore> {
    [
        ("Kroger", "Grocery/Supermarket", "300 North Dean Road", "Near Moores Mill / Cloverleaf"),
        ("Publix", "Grocery/Supermarket", "138 South Gay Street", "Downtown Auburn"),
        ("Auburn Hardware", "Hardware Store", "117 East Magnolia Avenue", "Downtown Auburn"),
        ("Russell Building Supply", "Hardware Store", "141 Bragg Avenue", "Near University Estates"),
        ("fab'rik", "Clothing Store", "140 North College Street", "Downtown Auburn"),
        ("Elisabet Boutique", "Clothing Store", "124 North College Street", "Downtown Auburn"),
        ("Ellie Clothing", "Clothing Store", "113 North College Street", "Downtown Auburn"),
        ("Johnston & Malone Book Store", "Bookstore", "115 South College Street", "Downtown Auburn"),
        ("Woodley Enterprises", "Computer Store", "557 Temple Street", "Near Grove Hill"),
        ("Z&Z Tobacco & Spirits", "Liquor Store", "203 Opelika Road", "Near Yarbrough Farms"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, category, address, neighborhood), rank)| TopStore {
        id: i64::from(rank),
        rank,
        name: name.to_string(),
        category: category.to_string(),
        address: address.to_string(),
        city: "Auburn".to_string(),
        zip: "36830".to_string(),
        neighborhood: neighborhood.to_string(),
    })
    .collect()
}

/// Ranked residential neighborhoods.
pub fn neighborhoods() -> Vec<Neighborhood> {
    [
        ("Moores Mill", "36830", Some(553_072.0), "Top 15% income in America. Golf course community, country club, custom homes. 40% have advanced degrees."),
        ("Cloverleaf / Windsor Forest", "36830", None, "Ranked 2nd most expensive Auburn neighborhood."),
        ("Willow Creek Farms", "36830", None, "Ranked 3rd most expensive. Upscale family neighborhood."),
        ("Yarbrough Farms / AU Club", "36830", None, "Premium prices. Proximity to AU campus. High demand."),
        ("Downtown Auburn", "36830", None, "Premium location near university. High demand, walkable."),
        ("University Estates", "36830", None, "Faculty and professional housing near campus."),
        ("Granite Hills / Head Estates", "36830", None, "Established upscale area."),
        ("Grove Hill", "36830", None, "Homes $300K-$500K range. Established neighborhood."),
        ("Stone Creek / Cobblestone", "36832", None, "Ranked 9th most expensive Auburn neighborhood."),
        ("Asheton Lakes", "36830", None, "HOA community with lake amenities."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, zip, median_home, features), rank)| Neighborhood {
        id: i64::from(rank),
        rank,
        kind: "NEIGHBORHOOD".to_string(),
        name: name.to_string(),
        zip: zip.to_string(),
        median_home,
        features: features.to_string(),
    })
    .collect()
}

/// Ranked zip codes with income profile.
pub fn zip_codes() -> Vec<ZipCode> {
    [
        ("Auburn (Primary)", "36830", Some(70_188.0), Some(103_989.0), Some(12.9), "Highest income Auburn zip. 45-64 age bracket earns $22K median."),
        ("Opelika (West)", "36804", None, None, None, "Top 1 most expensive homes in Auburn metro."),
        ("Auburn (University)", "36832", Some(42_717.0), Some(69_895.0), Some(6.0), "Heavy student population lowers median. Still has pockets of wealth."),
        ("Opelika (East)", "36801", None, None, None, "Top 2 most expensive homes in Auburn metro."),
        ("Waverly", "36879", Some(93_029.0), None, None, "Higher median income than Auburn 36830. Rural luxury estates."),
        ("Salem", "36874", None, None, None, "Growing area. 5yr home value up 39.7%."),
    ]
    .into_iter()
    .zip(1..)
    .map(
        |((name, zip, median_income, avg_income, pct_over_200k, features), rank)| ZipCode {
            id: i64::from(rank),
            rank,
            name: name.to_string(),
            zip: zip.to_string(),
            median_income,
            avg_income,
            pct_over_200k,
            features: features.to_string(),
        },
    )
    .collect()
}
