//! Deal record and pipeline stages.

use super::{merge, Entity, Record, RecordId, Timestamp};
use crate::store::Collection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline position of a deal.
///
/// Declaration order is the board order: open stages first, then the
/// terminal `Won` and `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStage {
    Prospect,
    Quoted,
    Negotiation,
    Scheduled,
    Won,
    Lost,
}

impl DealStage {
    /// All stages in board order.
    pub const ALL: [DealStage; 6] = [
        DealStage::Prospect,
        DealStage::Quoted,
        DealStage::Negotiation,
        DealStage::Scheduled,
        DealStage::Won,
        DealStage::Lost,
    ];

    /// Position in the board order, `0` for `Prospect`.
    pub fn precedence(self) -> usize {
        match self {
            Self::Prospect => 0,
            Self::Quoted => 1,
            Self::Negotiation => 2,
            Self::Scheduled => 3,
            Self::Won => 4,
            Self::Lost => 5,
        }
    }

    /// `Won` and `Lost` close a deal; every other stage is in the pipeline.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prospect => "Prospect",
            Self::Quoted => "Quoted",
            Self::Negotiation => "Negotiation",
            Self::Scheduled => "Scheduled",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    pub contact_id: Option<RecordId>,
    pub service_type: Option<String>,
    pub stage: DealStage,
    pub amount: Option<f64>,
    /// Win probability in percent.
    pub probability: Option<u8>,
    pub close_date: Option<NaiveDate>,
    /// Recurrence label such as "Monthly".
    pub recurring: Option<String>,
    pub notes: Option<String>,
    pub created_date: Timestamp,
    pub updated_date: Option<Timestamp>,
}

impl Deal {
    /// Amount with a missing value counted as zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    pub name: String,
    pub contact_id: Option<RecordId>,
    pub service_type: Option<String>,
    pub stage: DealStage,
    pub amount: Option<f64>,
    pub probability: Option<u8>,
    pub close_date: Option<NaiveDate>,
    pub recurring: Option<String>,
    pub notes: Option<String>,
}

impl DealDraft {
    /// Creates a `Prospect` draft with no amount.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_id: None,
            service_type: None,
            stage: DealStage::Prospect,
            amount: None,
            probability: None,
            close_date: None,
            recurring: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealPatch {
    pub name: Option<String>,
    pub contact_id: Option<Option<RecordId>>,
    pub service_type: Option<Option<String>>,
    pub stage: Option<DealStage>,
    pub amount: Option<Option<f64>>,
    pub probability: Option<Option<u8>>,
    pub close_date: Option<Option<NaiveDate>>,
    pub recurring: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl Record for Deal {
    const COLLECTION: Collection = Collection::Deals;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Deal {
    type Draft = DealDraft;
    type Patch = DealPatch;

    fn from_draft(id: RecordId, draft: DealDraft, now: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            contact_id: draft.contact_id,
            service_type: draft.service_type,
            stage: draft.stage,
            amount: draft.amount,
            probability: draft.probability,
            close_date: draft.close_date,
            recurring: draft.recurring,
            notes: draft.notes,
            created_date: now,
            updated_date: Some(now),
        }
    }

    fn apply_patch(&mut self, patch: DealPatch, now: Timestamp) {
        merge(&mut self.name, patch.name);
        merge(&mut self.contact_id, patch.contact_id);
        merge(&mut self.service_type, patch.service_type);
        merge(&mut self.stage, patch.stage);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.probability, patch.probability);
        merge(&mut self.close_date, patch.close_date);
        merge(&mut self.recurring, patch.recurring);
        merge(&mut self.notes, patch.notes);
        self.updated_date = Some(now);
    }

    fn created_date(&self) -> Timestamp {
        self.created_date
    }
}

#[cfg(test)]
mod tests {
    use super::DealStage;

    #[test]
    fn precedence_follows_board_order() {
        for (index, stage) in DealStage::ALL.iter().enumerate() {
            assert_eq!(stage.precedence(), index);
        }
    }

    #[test]
    fn only_won_and_lost_are_terminal() {
        let terminal: Vec<_> = DealStage::ALL
            .into_iter()
            .filter(|stage| stage.is_terminal())
            .collect();
        assert_eq!(terminal, vec![DealStage::Won, DealStage::Lost]);
    }

    #[test]
    fn stage_serializes_as_display_name() {
        let json = serde_json::to_string(&DealStage::Negotiation).unwrap();
        assert_eq!(json, "\"Negotiation\"");
    }
}
