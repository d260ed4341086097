//! Dashboard and board summaries.
//!
//! # Invariants
//! - Every summary is recomputed from a fresh read of each collection.
//! - "Today" comes from the injected clock (UTC calendar date).

use crate::clock::Clock;
use crate::model::campaign::Campaign;
use crate::model::contact::{Contact, LEAD_STATUS_NEW};
use crate::model::deal::{Deal, DealStage};
use crate::model::interaction::Interaction;
use crate::model::task::Task;
use crate::query::{
    active_deal_count, is_overdue, open_tasks, overdue_tasks, pipeline_value, recent,
    sort_deals_by_stage, upcoming_tasks, won_deal_count, won_revenue,
};
use crate::repo::entity_repo::{
    CampaignRepository, ContactRepository, DealRepository, EntityRepository,
    InteractionRepository, TaskRepository,
};
use crate::repo::RepoResult;
use crate::service::lookup_service::contact_display_name;
use crate::storage::KeyValueStorage;
use crate::store::Store;

/// Rows shown in each dashboard panel.
pub const DASHBOARD_PANEL_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_contacts: usize,
    pub new_leads: usize,
    pub active_deals: usize,
    pub pipeline_value: f64,
    pub won_revenue: f64,
    pub won_deals: usize,
    pub open_tasks: usize,
    pub overdue_tasks: usize,
    pub active_campaigns: usize,
    pub total_interactions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealRow {
    pub deal: Deal,
    /// Resolved contact name or `"-"`.
    pub contact_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub task: Task,
    /// Resolved contact name or `"-"`.
    pub contact_name: String,
    pub overdue: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_contacts: Vec<Contact>,
    pub recent_deals: Vec<DealRow>,
    pub upcoming_tasks: Vec<TaskRow>,
}

/// Badge counts for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCounts {
    pub contacts: usize,
    /// Tasks that are not Completed.
    pub pending_tasks: usize,
}

/// Deals in board order with pipeline totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DealBoard {
    pub deals: Vec<DealRow>,
    pub pipeline_value: f64,
    pub won_value: f64,
    pub won_count: usize,
    pub active_count: usize,
}

pub struct DashboardService<'s, S: KeyValueStorage> {
    clock: &'s dyn Clock,
    contacts: ContactRepository<'s, S>,
    deals: DealRepository<'s, S>,
    tasks: TaskRepository<'s, S>,
    interactions: InteractionRepository<'s, S>,
    campaigns: CampaignRepository<'s, S>,
}

impl<'s, S: KeyValueStorage> DashboardService<'s, S> {
    pub fn new(store: &'s Store<S>, clock: &'s dyn Clock) -> Self {
        Self {
            clock,
            contacts: ContactRepository::new(store, clock),
            deals: DealRepository::new(store, clock),
            tasks: TaskRepository::new(store, clock),
            interactions: InteractionRepository::new(store, clock),
            campaigns: CampaignRepository::new(store, clock),
        }
    }

    /// Builds the full dashboard for the clock's current date.
    pub fn dashboard(&self) -> RepoResult<DashboardSummary> {
        let contacts = self.contacts.list()?;
        let deals = self.deals.list()?;
        let tasks = self.tasks.list()?;
        let interactions = self.interactions.list()?;
        let campaigns = self.campaigns.list()?;
        let today = self.clock.today();

        let stats = compute_stats(&contacts, &deals, &tasks, &interactions, &campaigns, today);

        let recent_deals = recent(&deals, DASHBOARD_PANEL_SIZE)
            .into_iter()
            .map(|deal| deal_row(&contacts, deal))
            .collect();

        let upcoming = upcoming_tasks(&tasks, DASHBOARD_PANEL_SIZE)
            .into_iter()
            .map(|task| TaskRow {
                contact_name: contact_display_name(&contacts, task.contact_id),
                overdue: is_overdue(&task, today),
                task,
            })
            .collect();

        Ok(DashboardSummary {
            stats,
            recent_contacts: recent(&contacts, DASHBOARD_PANEL_SIZE),
            recent_deals,
            upcoming_tasks: upcoming,
        })
    }

    pub fn nav_counts(&self) -> RepoResult<NavCounts> {
        let contacts = self.contacts.list()?;
        let tasks = self.tasks.list()?;
        Ok(NavCounts {
            contacts: contacts.len(),
            pending_tasks: open_tasks(&tasks).len(),
        })
    }

    /// Deals in stage order, optionally restricted to one stage.
    ///
    /// Totals always cover every deal, independent of `stage`.
    pub fn deal_board(&self, stage: Option<DealStage>) -> RepoResult<DealBoard> {
        let contacts = self.contacts.list()?;
        let deals = self.deals.list()?;

        let mut shown: Vec<Deal> = deals
            .iter()
            .filter(|deal| stage.map_or(true, |stage| deal.stage == stage))
            .cloned()
            .collect();
        sort_deals_by_stage(&mut shown);

        Ok(DealBoard {
            deals: shown
                .into_iter()
                .map(|deal| deal_row(&contacts, deal))
                .collect(),
            pipeline_value: pipeline_value(&deals),
            won_value: won_revenue(&deals),
            won_count: won_deal_count(&deals),
            active_count: active_deal_count(&deals),
        })
    }
}

/// Headline counters over already-loaded collections.
pub fn compute_stats(
    contacts: &[Contact],
    deals: &[Deal],
    tasks: &[Task],
    interactions: &[Interaction],
    campaigns: &[Campaign],
    today: chrono::NaiveDate,
) -> DashboardStats {
    DashboardStats {
        total_contacts: contacts.len(),
        new_leads: contacts
            .iter()
            .filter(|contact| contact.lead_status.as_deref() == Some(LEAD_STATUS_NEW))
            .count(),
        active_deals: active_deal_count(deals),
        pipeline_value: pipeline_value(deals),
        won_revenue: won_revenue(deals),
        won_deals: won_deal_count(deals),
        open_tasks: open_tasks(tasks).len(),
        overdue_tasks: overdue_tasks(tasks, today).len(),
        active_campaigns: campaigns
            .iter()
            .filter(|campaign| campaign.is_active())
            .count(),
        total_interactions: interactions.len(),
    }
}

fn deal_row(contacts: &[Contact], deal: Deal) -> DealRow {
    DealRow {
        contact_name: contact_display_name(contacts, deal.contact_id),
        deal,
    }
}
