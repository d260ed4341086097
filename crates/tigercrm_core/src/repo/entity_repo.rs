//! Entity repository contract and store-backed implementation.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete for every mutable collection.
//! - Stamp ids and timestamps on the write paths.
//!
//! # Invariants
//! - Ids come from `max(id) + 1` over the collection read by the same call.
//! - `update` preserves `id` and `created_date`.
//! - `delete` never cascades into dependent collections.
//! - Each write is one whole-collection read/modify/write; two repositories
//!   writing different collections are not atomic together.

use super::{RepoError, RepoResult};
use crate::clock::Clock;
use crate::model::campaign::Campaign;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::model::interaction::Interaction;
use crate::model::task::Task;
use crate::model::{Entity, RecordId, Timestamp};
use crate::storage::KeyValueStorage;
use crate::store::{next_id_for, Store};
use log::info;
use std::marker::PhantomData;

/// CRUD contract shared by all mutable collections.
pub trait EntityRepository<E: Entity> {
    /// Returns every record in stored (insertion) order.
    fn list(&self) -> RepoResult<Vec<E>>;
    /// Returns one record, or `None` when the id is unknown.
    fn get(&self, id: RecordId) -> RepoResult<Option<E>>;
    /// Assigns id and creation stamp, appends, and returns the stored record.
    fn create(&self, draft: E::Draft) -> RepoResult<E>;
    /// Merges `patch` into an existing record and returns the result.
    fn update(&self, id: RecordId, patch: E::Patch) -> RepoResult<E>;
    /// Removes one record without touching records that reference it.
    fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// Repository for entity `E` persisted through a `Store`.
pub struct StoreRepository<'s, E, S: KeyValueStorage> {
    store: &'s Store<S>,
    clock: &'s dyn Clock,
    _entity: PhantomData<E>,
}

pub type ContactRepository<'s, S> = StoreRepository<'s, Contact, S>;
pub type DealRepository<'s, S> = StoreRepository<'s, Deal, S>;
pub type TaskRepository<'s, S> = StoreRepository<'s, Task, S>;
pub type InteractionRepository<'s, S> = StoreRepository<'s, Interaction, S>;
pub type CampaignRepository<'s, S> = StoreRepository<'s, Campaign, S>;

impl<'s, E: Entity, S: KeyValueStorage> StoreRepository<'s, E, S> {
    pub fn new(store: &'s Store<S>, clock: &'s dyn Clock) -> Self {
        Self {
            store,
            clock,
            _entity: PhantomData,
        }
    }

    /// Applies `mutate` to one record and persists the collection.
    ///
    /// Nothing is written when `mutate` fails.
    pub fn modify<F>(&self, id: RecordId, mutate: F) -> RepoResult<E>
    where
        F: FnOnce(&mut E, Timestamp) -> RepoResult<()>,
    {
        let mut records = self.store.get::<E>()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(RepoError::NotFound {
                collection: E::COLLECTION,
                id,
            })?;

        mutate(record, self.clock.now())?;
        let updated = record.clone();
        self.store.set(&records)?;

        info!(
            "event=record_update module=repo status=ok collection={} id={}",
            E::COLLECTION.name(),
            id
        );
        Ok(updated)
    }
}

impl<E: Entity, S: KeyValueStorage> EntityRepository<E> for StoreRepository<'_, E, S> {
    fn list(&self) -> RepoResult<Vec<E>> {
        Ok(self.store.get::<E>()?)
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<E>> {
        let records = self.store.get::<E>()?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }

    fn create(&self, draft: E::Draft) -> RepoResult<E> {
        let mut records = self.store.get::<E>()?;
        let id = next_id_for(&records)?;
        let record = E::from_draft(id, draft, self.clock.now());
        records.push(record.clone());
        self.store.set(&records)?;

        info!(
            "event=record_create module=repo status=ok collection={} id={}",
            E::COLLECTION.name(),
            id
        );
        Ok(record)
    }

    fn update(&self, id: RecordId, patch: E::Patch) -> RepoResult<E> {
        self.modify(id, |record, now| {
            record.apply_patch(patch, now);
            Ok(())
        })
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut records = self.store.get::<E>()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(RepoError::NotFound {
                collection: E::COLLECTION,
                id,
            });
        }

        self.store.set(&records)?;
        info!(
            "event=record_delete module=repo status=ok collection={} id={}",
            E::COLLECTION.name(),
            id
        );
        Ok(())
    }
}
