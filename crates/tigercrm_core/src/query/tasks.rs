//! Task open/overdue detection and list ordering.

use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDate;

/// A task is open until it is Completed.
pub fn is_open(task: &Task) -> bool {
    !task.is_completed()
}

/// Open, dated, and due strictly before `today`.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    is_open(task) && task.due_date.is_some_and(|due| due < today)
}

pub fn open_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| is_open(task)).collect()
}

pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| is_overdue(task, today)).collect()
}

pub fn tasks_with_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

/// Incomplete before completed, then due date ascending, undated last.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| (task.is_completed(), task.due_date.is_none(), task.due_date));
}

/// Open tasks in due-date order, undated last, at most `limit`.
pub fn upcoming_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut open: Vec<Task> = tasks.iter().filter(|task| is_open(task)).cloned().collect();
    sort_tasks(&mut open);
    open.truncate(limit);
    open
}

#[cfg(test)]
mod tests {
    use super::{is_overdue, sort_tasks, upcoming_tasks};
    use crate::model::task::{Task, TaskStatus};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i64, status: TaskStatus, due_date: Option<NaiveDate>) -> Task {
        Task {
            id,
            description: format!("task {id}"),
            task_type: None,
            contact_id: None,
            deal_id: None,
            due_date,
            priority: None,
            assigned_to: None,
            status,
            completed_date: None,
            created_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_date: None,
        }
    }

    #[test]
    fn yesterday_pending_is_overdue_until_completed() {
        let today = date(2024, 5, 10);
        let pending = task(1, TaskStatus::Pending, Some(date(2024, 5, 9)));
        assert!(is_overdue(&pending, today));

        let done = Task {
            status: TaskStatus::Completed,
            ..pending
        };
        assert!(!is_overdue(&done, today));
    }

    #[test]
    fn due_today_and_undated_are_not_overdue() {
        let today = date(2024, 5, 10);
        assert!(!is_overdue(&task(1, TaskStatus::Pending, Some(today)), today));
        assert!(!is_overdue(&task(2, TaskStatus::InProgress, None), today));
    }

    #[test]
    fn sort_puts_completed_last_and_undated_after_dated() {
        let mut tasks = vec![
            task(1, TaskStatus::Completed, Some(date(2024, 1, 1))),
            task(2, TaskStatus::Pending, None),
            task(3, TaskStatus::InProgress, Some(date(2024, 6, 1))),
            task(4, TaskStatus::Pending, Some(date(2024, 2, 1))),
            task(5, TaskStatus::Completed, None),
        ];
        sort_tasks(&mut tasks);

        let ids: Vec<_> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1, 5]);
    }

    #[test]
    fn upcoming_excludes_completed_and_truncates() {
        let tasks = vec![
            task(1, TaskStatus::Completed, Some(date(2024, 1, 1))),
            task(2, TaskStatus::Pending, Some(date(2024, 3, 1))),
            task(3, TaskStatus::Pending, Some(date(2024, 2, 1))),
            task(4, TaskStatus::Pending, None),
        ];
        let upcoming = upcoming_tasks(&tasks, 2);

        let ids: Vec<_> = upcoming.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
