//! Read access to seeded reference collections.

use super::RepoResult;
use crate::model::reference::{Neighborhood, TopStore, ZipCode};
use crate::model::Record;
use crate::storage::KeyValueStorage;
use crate::store::Store;

/// Rank-ordered reads over stores, neighborhoods and zip codes.
pub struct ReferenceRepository<'s, S: KeyValueStorage> {
    store: &'s Store<S>,
}

impl<'s, S: KeyValueStorage> ReferenceRepository<'s, S> {
    pub fn new(store: &'s Store<S>) -> Self {
        Self { store }
    }

    pub fn stores(&self) -> RepoResult<Vec<TopStore>> {
        self.ranked(|store: &TopStore| store.rank)
    }

    pub fn neighborhoods(&self) -> RepoResult<Vec<Neighborhood>> {
        self.ranked(|neighborhood: &Neighborhood| neighborhood.rank)
    }

    pub fn zip_codes(&self) -> RepoResult<Vec<ZipCode>> {
        self.ranked(|zip: &ZipCode| zip.rank)
    }

    fn ranked<T: Record>(&self, rank: impl Fn(&T) -> u32) -> RepoResult<Vec<T>> {
        let mut records = self.store.get::<T>()?;
        records.sort_by_key(|record| rank(record));
        Ok(records)
    }
}
