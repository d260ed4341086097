//! Contact use-case service.
//!
//! # Responsibility
//! - Serve the contact list, autocomplete and contact detail rollup.
//! - Create tasks on behalf of a contact.
//!
//! # Invariants
//! - Deleting a contact leaves its deals, tasks and interactions in place.
//! - `add_task_for_contact` reads contacts and writes tasks as two separate
//!   steps; no transaction spans both collections.

use crate::clock::Clock;
use crate::model::contact::{Contact, ContactDraft, ContactPatch};
use crate::model::deal::Deal;
use crate::model::interaction::Interaction;
use crate::model::task::{Task, TaskDraft};
use crate::model::RecordId;
use crate::query::{
    deals_for_contact, filter_contacts, interactions_for_contact, quick_search, recent,
    tasks_for_contact, ContactFilter,
};
use crate::repo::entity_repo::{
    ContactRepository, DealRepository, EntityRepository, InteractionRepository, TaskRepository,
};
use crate::repo::{RepoError, RepoResult};
use crate::storage::KeyValueStorage;
use crate::store::{Collection, Store};

/// Contact with everything that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetail {
    pub contact: Contact,
    /// Stored order.
    pub deals: Vec<Deal>,
    /// Stored order.
    pub tasks: Vec<Task>,
    /// Newest first.
    pub interactions: Vec<Interaction>,
}

pub struct ContactService<'s, S: KeyValueStorage> {
    contacts: ContactRepository<'s, S>,
    deals: DealRepository<'s, S>,
    tasks: TaskRepository<'s, S>,
    interactions: InteractionRepository<'s, S>,
}

impl<'s, S: KeyValueStorage> ContactService<'s, S> {
    pub fn new(store: &'s Store<S>, clock: &'s dyn Clock) -> Self {
        Self {
            contacts: ContactRepository::new(store, clock),
            deals: DealRepository::new(store, clock),
            tasks: TaskRepository::new(store, clock),
            interactions: InteractionRepository::new(store, clock),
        }
    }

    pub fn create_contact(&self, draft: ContactDraft) -> RepoResult<Contact> {
        self.contacts.create(draft)
    }

    pub fn update_contact(&self, id: RecordId, patch: ContactPatch) -> RepoResult<Contact> {
        self.contacts.update(id, patch)
    }

    /// Removes the contact only; dependents keep the dangling `contact_id`.
    pub fn delete_contact(&self, id: RecordId) -> RepoResult<()> {
        self.contacts.delete(id)
    }

    /// Filtered contact list, newest first.
    pub fn list_contacts(&self, filter: &ContactFilter) -> RepoResult<Vec<Contact>> {
        Ok(filter_contacts(&self.contacts.list()?, filter))
    }

    pub fn quick_search(&self, query: &str) -> RepoResult<Vec<Contact>> {
        Ok(quick_search(&self.contacts.list()?, query))
    }

    /// Loads one contact with its deals, tasks and interactions.
    pub fn contact_detail(&self, id: RecordId) -> RepoResult<Option<ContactDetail>> {
        let Some(contact) = self.contacts.get(id)? else {
            return Ok(None);
        };

        let interactions = interactions_for_contact(&self.interactions.list()?, id);
        Ok(Some(ContactDetail {
            contact,
            deals: deals_for_contact(&self.deals.list()?, id),
            tasks: tasks_for_contact(&self.tasks.list()?, id),
            interactions: recent(&interactions, interactions.len()),
        }))
    }

    /// Creates a task linked to an existing contact.
    pub fn add_task_for_contact(
        &self,
        contact_id: RecordId,
        mut draft: TaskDraft,
    ) -> RepoResult<Task> {
        if self.contacts.get(contact_id)?.is_none() {
            return Err(RepoError::NotFound {
                collection: Collection::Contacts,
                id: contact_id,
            });
        }

        draft.contact_id = Some(contact_id);
        self.tasks.create(draft)
    }
}
