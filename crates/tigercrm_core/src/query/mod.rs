//! Pure aggregation and ordering over loaded collections.
//!
//! # Invariants
//! - Functions never touch storage; callers pass slices read for the call.
//! - Results are recomputed from scratch on every call.
//! - Sorts are stable, so ties keep stored (insertion) order.

pub mod contacts;
pub mod pipeline;
pub mod recent;
pub mod tasks;

pub use contacts::{
    deals_for_contact, filter_contacts, interactions_for_contact, quick_search,
    tasks_for_contact, ContactFilter, QUICK_SEARCH_LIMIT, QUICK_SEARCH_MIN_CHARS,
};
pub use pipeline::{
    active_deal_count, deals_in_stage, pipeline_value, sort_deals_by_stage, won_deal_count,
    won_revenue,
};
pub use recent::recent;
pub use tasks::{
    is_open, is_overdue, open_tasks, overdue_tasks, sort_tasks, tasks_with_status,
    upcoming_tasks,
};
