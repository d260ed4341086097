//! Newest-first selection.

use crate::model::Entity;

/// Returns up to `limit` records ordered by descending `created_date`.
///
/// Records created at the same instant keep their stored order.
pub fn recent<E: Entity>(records: &[E], limit: usize) -> Vec<E> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_date().cmp(&a.created_date()));
    sorted.truncate(limit);
    sorted
}
