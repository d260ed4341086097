use chrono::{TimeZone, Utc};
use tigercrm_core::db::open_db;
use tigercrm_core::{
    seed_reference_data, ContactDraft, ContactRepository, EntityRepository, FixedClock,
    KeyValueStorage, MemoryKeyValueStorage, ReferenceRepository, SeedOutcome,
    SqliteKeyValueStorage, Store,
};

#[test]
fn first_seed_writes_all_reference_collections() {
    let store = Store::new(MemoryKeyValueStorage::new());

    assert_eq!(seed_reference_data(&store).unwrap(), SeedOutcome::Seeded);
    assert!(store.is_seeded().unwrap());

    let reference = ReferenceRepository::new(&store);
    let stores = reference.stores().unwrap();
    let neighborhoods = reference.neighborhoods().unwrap();
    let zip_codes = reference.zip_codes().unwrap();
    assert_eq!(stores.len(), 10);
    assert_eq!(neighborhoods.len(), 10);
    assert_eq!(zip_codes.len(), 6);

    assert_eq!(stores[0].rank, 1);
    assert!(stores.windows(2).all(|pair| pair[0].rank < pair[1].rank));
    assert!(zip_codes.iter().all(|zip| zip.zip.starts_with("368")));
}

#[test]
fn second_seed_is_a_no_op() {
    let storage = MemoryKeyValueStorage::new();
    let store = Store::new(&storage);
    seed_reference_data(&store).unwrap();

    storage.set_item("tm_stores", "[]").unwrap();
    assert_eq!(
        seed_reference_data(&store).unwrap(),
        SeedOutcome::AlreadySeeded
    );

    let stores = ReferenceRepository::new(&store).stores().unwrap();
    assert!(stores.is_empty());
}

#[test]
fn seeding_twice_leaves_reference_data_unchanged() {
    let store = Store::new(MemoryKeyValueStorage::new());
    let reference = ReferenceRepository::new(&store);

    seed_reference_data(&store).unwrap();
    let stores = reference.stores().unwrap();
    let neighborhoods = reference.neighborhoods().unwrap();
    let zip_codes = reference.zip_codes().unwrap();

    assert_eq!(
        seed_reference_data(&store).unwrap(),
        SeedOutcome::AlreadySeeded
    );

    assert_eq!(reference.stores().unwrap(), stores);
    assert_eq!(reference.neighborhoods().unwrap(), neighborhoods);
    assert_eq!(reference.zip_codes().unwrap(), zip_codes);
    assert_eq!(stores.len(), 10);
    assert_eq!(neighborhoods.len(), 10);
    assert_eq!(zip_codes.len(), 6);
}

#[test]
fn seeding_never_touches_user_collections() {
    let storage = MemoryKeyValueStorage::new();
    let store = Store::new(&storage);
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());
    ContactRepository::new(&store, &clock)
        .create(ContactDraft::new("Existing", "Contact"))
        .unwrap();
    let before = storage.get_item("tm_contacts").unwrap();

    seed_reference_data(&store).unwrap();

    assert_eq!(storage.get_item("tm_contacts").unwrap(), before);
    for key in ["tm_deals", "tm_tasks", "tm_interactions", "tm_campaigns"] {
        assert!(storage.get_item(key).unwrap().is_none(), "{key} was written");
    }
}

#[test]
fn seeded_flag_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = Store::new(SqliteKeyValueStorage::try_new(&conn).unwrap());
        assert_eq!(seed_reference_data(&store).unwrap(), SeedOutcome::Seeded);
    }

    let conn = open_db(&path).unwrap();
    let store = Store::new(SqliteKeyValueStorage::try_new(&conn).unwrap());
    assert_eq!(
        seed_reference_data(&store).unwrap(),
        SeedOutcome::AlreadySeeded
    );
    assert_eq!(ReferenceRepository::new(&store).neighborhoods().unwrap().len(), 10);
}
