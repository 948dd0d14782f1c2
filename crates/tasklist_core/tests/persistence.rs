mod support;

use support::FaultyStore;
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::{
    KeyValueStore, KvError, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, Task,
    TaskRepository, TaskStore, DEFAULT_STORAGE_KEY,
};

fn sqlite_repo() -> TaskRepository<SqliteKeyValueStore> {
    TaskRepository::new(SqliteKeyValueStore::new(open_db_in_memory().unwrap()))
}

#[test]
fn save_then_load_roundtrips_collection() {
    let mut repo = sqlite_repo();
    let tasks = vec![
        Task::with_id("b", "Walk dog", false, 1_700_000_000_001),
        Task::with_id("a", "Buy milk", true, 1_700_000_000_000),
    ];

    repo.save(&tasks).unwrap();
    assert_eq!(repo.load().unwrap(), tasks);
}

#[test]
fn save_then_load_roundtrips_empty_collection() {
    let mut repo = sqlite_repo();
    repo.save(&[Task::with_id("a", "x", false, 1)]).unwrap();
    repo.save(&[]).unwrap();

    assert_eq!(repo.store().get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn absent_key_loads_empty_collection() {
    assert!(sqlite_repo().load().unwrap().is_empty());
}

#[test]
fn corrupt_or_non_array_blobs_load_empty_collection() {
    for raw in ["{not json", "{\"id\":\"a\"}", "42", "\"text\"", "null", "[1, 2]"] {
        let repo = TaskRepository::new(MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, raw));
        assert!(repo.load().unwrap().is_empty(), "blob `{raw}` should load as empty");
    }
}

#[test]
fn legacy_string_ids_are_accepted() {
    let raw = r#"[{"id":"1697040000000k3j9x2","text":"Legacy","completed":true,"createdAt":1697040000000}]"#;
    let repo = TaskRepository::new(MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, raw));

    let tasks = repo.load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id.as_str(), "1697040000000k3j9x2");
    assert!(tasks[0].completed);
}

#[test]
fn store_mutations_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.sqlite3");

    let mut store = TaskStore::open(TaskRepository::new(SqliteKeyValueStore::new(
        open_db(&path).unwrap(),
    )))
    .unwrap();
    let milk = store.add("Buy milk").unwrap().unwrap();
    store.add("Walk dog").unwrap();
    store.toggle(&milk).unwrap();
    let expected = store.tasks().to_vec();
    drop(store);

    let reopened = TaskStore::open(TaskRepository::new(SqliteKeyValueStore::new(
        open_db(&path).unwrap(),
    )))
    .unwrap();
    assert_eq!(reopened.tasks(), expected.as_slice());
}

#[test]
fn write_failure_is_surfaced_and_memory_state_stays_usable() {
    let (kv, faults) = FaultyStore::new();
    let mut store = TaskStore::open(TaskRepository::new(kv)).unwrap();
    let id = store.add("saved").unwrap().unwrap();
    faults.writes.set(true);

    let err = store.toggle(&id).unwrap_err();
    assert!(matches!(err, StoreError::Write(KvError::WriteRejected(_))));
    assert!(store.get(&id).unwrap().completed);

    faults.writes.set(false);
    store.add("later").unwrap();
    assert_eq!(store.repository().load().unwrap(), store.tasks());
}

#[test]
fn read_failure_is_returned_instead_of_an_empty_list() {
    let saved = vec![
        Task::with_id("c", "third", false, 3),
        Task::with_id("b", "second", true, 2),
        Task::with_id("a", "first", false, 1),
    ];
    let blob = serde_json::to_string(&saved).unwrap();
    let (kv, faults) = FaultyStore::with_entry(DEFAULT_STORAGE_KEY, &blob);
    faults.reads.set(true);
    let repo = TaskRepository::new(kv);

    assert!(matches!(repo.load(), Err(KvError::Db(_))));
    let Err(err) = TaskStore::open(repo) else {
        panic!("opening over a failed read must not yield a store");
    };
    assert!(err.to_string().contains("locked"));
}

#[test]
fn stored_list_is_intact_once_reads_recover() {
    let saved = vec![Task::with_id("a", "first", false, 1)];
    let blob = serde_json::to_string(&saved).unwrap();
    let (kv, faults) = FaultyStore::with_entry(DEFAULT_STORAGE_KEY, &blob);
    let repo = TaskRepository::new(kv);

    faults.reads.set(true);
    assert!(repo.load().is_err());
    faults.reads.set(false);

    let mut store = TaskStore::open(repo).unwrap();
    store.add("new").unwrap();
    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["new", "first"]);
    assert_eq!(store.repository().load().unwrap(), store.tasks());
}
