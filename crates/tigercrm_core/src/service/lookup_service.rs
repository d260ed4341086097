//! Foreign-key display lookups.
//!
//! # Invariants
//! - A missing or dangling reference resolves to `MISSING_REFERENCE`, never
//!   an error.

use crate::clock::Clock;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::model::RecordId;
use crate::repo::entity_repo::{ContactRepository, DealRepository, EntityRepository};
use crate::repo::RepoResult;
use crate::storage::KeyValueStorage;
use crate::store::Store;

/// Display value for an unset or unresolvable reference.
pub const MISSING_REFERENCE: &str = "-";

/// Resolves `contact_id` against `contacts` to `"<first> <last>"`.
pub fn contact_display_name(contacts: &[Contact], contact_id: Option<RecordId>) -> String {
    contact_id
        .and_then(|id| contacts.iter().find(|contact| contact.id == id))
        .map_or_else(|| MISSING_REFERENCE.to_string(), Contact::full_name)
}

/// Resolves `deal_id` against `deals` to the deal name.
pub fn deal_display_name(deals: &[Deal], deal_id: Option<RecordId>) -> String {
    deal_id
        .and_then(|id| deals.iter().find(|deal| deal.id == id))
        .map_or_else(|| MISSING_REFERENCE.to_string(), |deal| deal.name.clone())
}

/// Store-backed variant of the display lookups.
pub struct LookupService<'s, S: KeyValueStorage> {
    contacts: ContactRepository<'s, S>,
    deals: DealRepository<'s, S>,
}

impl<'s, S: KeyValueStorage> LookupService<'s, S> {
    pub fn new(store: &'s Store<S>, clock: &'s dyn Clock) -> Self {
        Self {
            contacts: ContactRepository::new(store, clock),
            deals: DealRepository::new(store, clock),
        }
    }

    pub fn contact_name(&self, contact_id: Option<RecordId>) -> RepoResult<String> {
        if contact_id.is_none() {
            return Ok(MISSING_REFERENCE.to_string());
        }
        Ok(contact_display_name(&self.contacts.list()?, contact_id))
    }

    pub fn deal_name(&self, deal_id: Option<RecordId>) -> RepoResult<String> {
        if deal_id.is_none() {
            return Ok(MISSING_REFERENCE.to_string());
        }
        Ok(deal_display_name(&self.deals.list()?, deal_id))
    }
}
