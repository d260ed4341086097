//! Contact (lead/customer) record.

use super::{merge, Entity, Record, RecordId, Timestamp};
use crate::store::Collection;
use serde::{Deserialize, Serialize};

/// Lead status counted as a new lead on the dashboard.
pub const LEAD_STATUS_NEW: &str = "New";

const DEFAULT_CITY: &str = "Auburn";
const DEFAULT_STATE: &str = "AL";
const DEFAULT_OWNER: &str = "Jason";
const DEFAULT_CONTACT_TYPE: &str = "Lead";
const DEFAULT_LEAD_SOURCE: &str = "Door Knock";
const DEFAULT_PROPERTY_TYPE: &str = "Residential";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub neighborhood: Option<String>,
    pub contact_type: Option<String>,
    pub lead_source: Option<String>,
    pub lead_status: Option<String>,
    pub interest_services: Option<String>,
    pub property_type: Option<String>,
    pub estimated_value: Option<f64>,
    /// Star rating, 1-5 when set.
    pub rating: Option<u8>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub created_date: Timestamp,
    pub updated_date: Option<Timestamp>,
}

impl Contact {
    /// Display name as `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create input for a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub neighborhood: Option<String>,
    pub contact_type: Option<String>,
    pub lead_source: Option<String>,
    pub lead_status: Option<String>,
    pub interest_services: Option<String>,
    pub property_type: Option<String>,
    pub estimated_value: Option<f64>,
    pub rating: Option<u8>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

impl ContactDraft {
    /// Creates a draft pre-filled with the intake form defaults
    /// (Auburn, AL, new door-knock lead, residential, owned by Jason).
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: None,
            job_title: None,
            email: None,
            phone: None,
            address: None,
            city: Some(DEFAULT_CITY.to_string()),
            state: Some(DEFAULT_STATE.to_string()),
            zip: None,
            neighborhood: None,
            contact_type: Some(DEFAULT_CONTACT_TYPE.to_string()),
            lead_source: Some(DEFAULT_LEAD_SOURCE.to_string()),
            lead_status: Some(LEAD_STATUS_NEW.to_string()),
            interest_services: None,
            property_type: Some(DEFAULT_PROPERTY_TYPE.to_string()),
            estimated_value: None,
            rating: None,
            assigned_to: Some(DEFAULT_OWNER.to_string()),
            notes: None,
        }
    }
}

/// Partial update for a contact. Nullable fields use `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<Option<String>>,
    pub job_title: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub zip: Option<Option<String>>,
    pub neighborhood: Option<Option<String>>,
    pub contact_type: Option<Option<String>>,
    pub lead_source: Option<Option<String>>,
    pub lead_status: Option<Option<String>>,
    pub interest_services: Option<Option<String>>,
    pub property_type: Option<Option<String>>,
    pub estimated_value: Option<Option<f64>>,
    pub rating: Option<Option<u8>>,
    pub assigned_to: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl Record for Contact {
    const COLLECTION: Collection = Collection::Contacts;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Contact {
    type Draft = ContactDraft;
    type Patch = ContactPatch;

    fn from_draft(id: RecordId, draft: ContactDraft, now: Timestamp) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            company: draft.company,
            job_title: draft.job_title,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip: draft.zip,
            neighborhood: draft.neighborhood,
            contact_type: draft.contact_type,
            lead_source: draft.lead_source,
            lead_status: draft.lead_status,
            interest_services: draft.interest_services,
            property_type: draft.property_type,
            estimated_value: draft.estimated_value,
            rating: draft.rating,
            assigned_to: draft.assigned_to,
            notes: draft.notes,
            created_date: now,
            updated_date: Some(now),
        }
    }

    fn apply_patch(&mut self, patch: ContactPatch, now: Timestamp) {
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.company, patch.company);
        merge(&mut self.job_title, patch.job_title);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.address, patch.address);
        merge(&mut self.city, patch.city);
        merge(&mut self.state, patch.state);
        merge(&mut self.zip, patch.zip);
        merge(&mut self.neighborhood, patch.neighborhood);
        merge(&mut self.contact_type, patch.contact_type);
        merge(&mut self.lead_source, patch.lead_source);
        merge(&mut self.lead_status, patch.lead_status);
        merge(&mut self.interest_services, patch.interest_services);
        merge(&mut self.property_type, patch.property_type);
        merge(&mut self.estimated_value, patch.estimated_value);
        merge(&mut self.rating, patch.rating);
        merge(&mut self.assigned_to, patch.assigned_to);
        merge(&mut self.notes, patch.notes);
        self.updated_date = Some(now);
    }

    fn created_date(&self) -> Timestamp {
        self.created_date
    }
}
