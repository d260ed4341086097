//! Marketing campaign record with manually maintained result counters.

use super::{merge, Entity, Record, RecordId, Timestamp};
use crate::store::Collection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Campaign status counted as active on the dashboard.
pub const CAMPAIGN_STATUS_ACTIVE: &str = "Active";

const DEFAULT_CAMPAIGN_STATUS: &str = "Planned";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    pub campaign_type: Option<String>,
    pub target_area: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(default)]
    pub leads_generated: u32,
    #[serde(default)]
    pub deals_won: u32,
    #[serde(default)]
    pub revenue_generated: f64,
    pub notes: Option<String>,
    pub created_date: Timestamp,
    pub updated_date: Option<Timestamp>,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some(CAMPAIGN_STATUS_ACTIVE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub campaign_type: Option<String>,
    pub target_area: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub leads_generated: u32,
    pub deals_won: u32,
    pub revenue_generated: f64,
    pub notes: Option<String>,
}

impl CampaignDraft {
    /// Creates a planned campaign with zeroed counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            campaign_type: None,
            target_area: None,
            budget: None,
            start_date: None,
            end_date: None,
            status: Some(DEFAULT_CAMPAIGN_STATUS.to_string()),
            leads_generated: 0,
            deals_won: 0,
            revenue_generated: 0.0,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub campaign_type: Option<Option<String>>,
    pub target_area: Option<Option<String>>,
    pub budget: Option<Option<f64>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<Option<String>>,
    pub leads_generated: Option<u32>,
    pub deals_won: Option<u32>,
    pub revenue_generated: Option<f64>,
    pub notes: Option<Option<String>>,
}

impl Record for Campaign {
    const COLLECTION: Collection = Collection::Campaigns;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Campaign {
    type Draft = CampaignDraft;
    type Patch = CampaignPatch;

    fn from_draft(id: RecordId, draft: CampaignDraft, now: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            campaign_type: draft.campaign_type,
            target_area: draft.target_area,
            budget: draft.budget,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            leads_generated: draft.leads_generated,
            deals_won: draft.deals_won,
            revenue_generated: draft.revenue_generated,
            notes: draft.notes,
            created_date: now,
            updated_date: Some(now),
        }
    }

    fn apply_patch(&mut self, patch: CampaignPatch, now: Timestamp) {
        merge(&mut self.name, patch.name);
        merge(&mut self.campaign_type, patch.campaign_type);
        merge(&mut self.target_area, patch.target_area);
        merge(&mut self.budget, patch.budget);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge(&mut self.status, patch.status);
        merge(&mut self.leads_generated, patch.leads_generated);
        merge(&mut self.deals_won, patch.deals_won);
        merge(&mut self.revenue_generated, patch.revenue_generated);
        merge(&mut self.notes, patch.notes);
        self.updated_date = Some(now);
    }

    fn created_date(&self) -> Timestamp {
        self.created_date
    }
}
