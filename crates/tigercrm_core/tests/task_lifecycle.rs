use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tigercrm_core::{
    FixedClock, MemoryKeyValueStorage, RepoError, Store, TaskDraft, TaskPatch, TaskService,
    TaskStatus,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn dated(description: &str, due: Option<NaiveDate>) -> TaskDraft {
    let mut draft = TaskDraft::new(description);
    draft.due_date = due;
    draft
}

#[test]
fn new_tasks_start_pending_with_defaults() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);

    let task = service.create_task(TaskDraft::new("Send quote")).unwrap();

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.task_type.as_deref(), Some("Follow Up"));
    assert_eq!(task.priority.as_deref(), Some("Normal"));
    assert_eq!(task.completed_date, None);
}

#[test]
fn complete_stamps_once_and_is_idempotent() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);
    let task = service.create_task(TaskDraft::new("Measure roof")).unwrap();

    clock.advance(Duration::hours(4));
    let completed = service.complete_task(task.id).unwrap();
    assert_eq!(completed.status, TaskStatus::Completed);
    let first_stamp = completed.completed_date.unwrap();
    assert_eq!(first_stamp, task.created_date + Duration::hours(4));

    clock.advance(Duration::days(1));
    let again = service.complete_task(task.id).unwrap();
    assert_eq!(again.completed_date, Some(first_stamp));
    assert_eq!(again.updated_date, completed.updated_date);
}

#[test]
fn start_moves_pending_to_in_progress_only() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);
    let task = service.create_task(TaskDraft::new("Schedule crew")).unwrap();

    let started = service.start_task(task.id).unwrap();
    assert_eq!(started.status, TaskStatus::InProgress);

    assert!(matches!(
        service.start_task(task.id),
        Err(RepoError::InvalidTransition {
            from: TaskStatus::InProgress,
            to: TaskStatus::InProgress,
            ..
        })
    ));

    service.complete_task(task.id).unwrap();
    assert!(matches!(
        service.start_task(task.id),
        Err(RepoError::InvalidTransition {
            from: TaskStatus::Completed,
            ..
        })
    ));
}

#[test]
fn status_changes_on_unknown_task_report_not_found() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);

    assert!(matches!(
        service.complete_task(3),
        Err(RepoError::NotFound { id: 3, .. })
    ));
    assert!(matches!(
        service.start_task(3),
        Err(RepoError::NotFound { id: 3, .. })
    ));
}

#[test]
fn editing_a_completed_task_keeps_its_status() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);
    let task = service.create_task(TaskDraft::new("Invoice")).unwrap();
    service.complete_task(task.id).unwrap();

    let edited = service
        .update_task(
            task.id,
            TaskPatch {
                description: Some("Invoice and receipt".to_string()),
                due_date: Some(Some(date(2024, 7, 5))),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(edited.status, TaskStatus::Completed);
    assert!(edited.completed_date.is_some());
    assert_eq!(edited.description, "Invoice and receipt");
}

#[test]
fn list_orders_open_first_then_due_date_undated_last() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);

    let done = service
        .create_task(dated("done early", Some(date(2024, 6, 1))))
        .unwrap();
    service.create_task(dated("undated", None)).unwrap();
    service
        .create_task(dated("later", Some(date(2024, 7, 20))))
        .unwrap();
    service
        .create_task(dated("sooner", Some(date(2024, 7, 2))))
        .unwrap();
    service.complete_task(done.id).unwrap();

    let order: Vec<String> = service
        .list_tasks(None)
        .unwrap()
        .into_iter()
        .map(|task| task.description)
        .collect();
    assert_eq!(order, vec!["sooner", "later", "undated", "done early"]);

    let completed = service.list_tasks(Some(TaskStatus::Completed)).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);
    assert_eq!(service.list_tasks(Some(TaskStatus::InProgress)).unwrap().len(), 0);
}

#[test]
fn delete_removes_the_task() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let clock = clock();
    let service = TaskService::new(&store, &clock);
    let task = service.create_task(TaskDraft::new("Temporary")).unwrap();

    service.delete_task(task.id).unwrap();

    assert!(service.list_tasks(None).unwrap().is_empty());
    assert!(matches!(
        service.delete_task(task.id),
        Err(RepoError::NotFound { .. })
    ));
}
