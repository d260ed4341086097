//! Contact filtering, quick search and per-contact rollups.

use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::model::interaction::Interaction;
use crate::model::task::Task;
use crate::model::RecordId;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest query `quick_search` answers.
pub const QUICK_SEARCH_MIN_CHARS: usize = 2;
/// Maximum hits returned by `quick_search`.
pub const QUICK_SEARCH_LIMIT: usize = 10;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Contact list filter. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring over name, company, email and phone.
    pub search: Option<String>,
    /// Exact lead status match.
    pub lead_status: Option<String>,
    /// Exact contact type match.
    pub contact_type: Option<String>,
}

/// Applies `filter` and orders the result newest first.
pub fn filter_contacts(contacts: &[Contact], filter: &ContactFilter) -> Vec<Contact> {
    let needle = filter
        .search
        .as_deref()
        .map(normalize_search_text)
        .filter(|value| !value.is_empty());

    let mut matched: Vec<Contact> = contacts
        .iter()
        .filter(|contact| {
            needle
                .as_deref()
                .map_or(true, |needle| search_haystack(contact).contains(needle))
        })
        .filter(|contact| matches_exact(contact.lead_status.as_deref(), &filter.lead_status))
        .filter(|contact| matches_exact(contact.contact_type.as_deref(), &filter.contact_type))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    matched
}

/// Autocomplete lookup over first name, last name and company.
///
/// Queries shorter than `QUICK_SEARCH_MIN_CHARS` (counted as typed,
/// whitespace included) return nothing. Matching is a case-insensitive
/// substring test on the raw query. Hits are ordered by first name ignoring
/// case and capped at `QUICK_SEARCH_LIMIT`.
pub fn quick_search(contacts: &[Contact], query: &str) -> Vec<Contact> {
    if query.chars().count() < QUICK_SEARCH_MIN_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits: Vec<Contact> = contacts
        .iter()
        .filter(|contact| {
            [
                Some(contact.first_name.as_str()),
                Some(contact.last_name.as_str()),
                contact.company.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
        })
        .cloned()
        .collect();

    hits.sort_by_cached_key(|contact| contact.first_name.to_lowercase());
    hits.truncate(QUICK_SEARCH_LIMIT);
    hits
}

pub fn deals_for_contact(deals: &[Deal], contact_id: RecordId) -> Vec<Deal> {
    deals
        .iter()
        .filter(|deal| deal.contact_id == Some(contact_id))
        .cloned()
        .collect()
}

pub fn tasks_for_contact(tasks: &[Task], contact_id: RecordId) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.contact_id == Some(contact_id))
        .cloned()
        .collect()
}

pub fn interactions_for_contact(
    interactions: &[Interaction],
    contact_id: RecordId,
) -> Vec<Interaction> {
    interactions
        .iter()
        .filter(|interaction| interaction.contact_id == Some(contact_id))
        .cloned()
        .collect()
}

fn matches_exact(value: Option<&str>, wanted: &Option<String>) -> bool {
    match wanted.as_deref() {
        Some(wanted) if !wanted.is_empty() => value == Some(wanted),
        _ => true,
    }
}

fn search_haystack(contact: &Contact) -> String {
    let joined = [
        contact.first_name.as_str(),
        contact.last_name.as_str(),
        contact.company.as_deref().unwrap_or(""),
        contact.email.as_deref().unwrap_or(""),
        contact.phone.as_deref().unwrap_or(""),
    ]
    .join(" ");
    normalize_search_text(&joined)
}

fn normalize_search_text(value: &str) -> String {
    WHITESPACE_RE
        .replace_all(value.trim(), " ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_search_text, quick_search};
    use crate::model::contact::{Contact, ContactDraft};
    use crate::model::Entity;
    use chrono::{TimeZone, Utc};

    fn contact(id: i64, first: &str, last: &str) -> Contact {
        Contact::from_draft(
            id,
            ContactDraft::new(first, last),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn normalize_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_search_text("  Mary \t Ann  "), "mary ann");
    }

    #[test]
    fn quick_search_requires_two_characters() {
        let contacts = vec![contact(1, "Amy", "Adams")];
        assert!(quick_search(&contacts, "a").is_empty());
        assert_eq!(quick_search(&contacts, "am").len(), 1);
    }

    #[test]
    fn quick_search_orders_by_first_name() {
        let contacts = vec![
            contact(1, "Zed", "Mills"),
            contact(2, "Abe", "Miller"),
            contact(3, "Kim", "Jones"),
        ];
        let hits = quick_search(&contacts, "MILL");
        let ids: Vec<_> = hits.iter().map(|contact| contact.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn quick_search_orders_first_names_ignoring_case() {
        let contacts = vec![
            contact(1, "bob", "Hall"),
            contact(2, "Carla", "Hall"),
            contact(3, "Alan", "Hall"),
        ];
        let ids: Vec<_> = quick_search(&contacts, "hall")
            .iter()
            .map(|contact| contact.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn quick_search_counts_the_query_as_typed() {
        let mut with_space = contact(1, "Ada", "Lovelace");
        with_space.company = Some("Ada Roofing".to_string());
        let contacts = vec![with_space, contact(2, "Adam", "Reed")];

        let ids: Vec<_> = quick_search(&contacts, "a ")
            .iter()
            .map(|contact| contact.id)
            .collect();
        assert_eq!(ids, vec![1]);
        assert!(quick_search(&contacts, " ").is_empty());
    }
}
