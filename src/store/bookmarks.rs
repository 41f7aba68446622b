use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

use crate::db::{KeyValueStore, KvError};
use crate::models::BookmarkRecord;

/// Key of the saved-locations blob.
pub const BOOKMARKS_KEY: &str = "saved_locations_v1";

const EVENT_CAPACITY: usize = 16;

/// Emitted after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkEvent {
    Added(String),
    Removed(String),
}

/// Ordered list of saved locations, most recently saved first.
///
/// Every read goes to the backend; nothing is cached. Mutations issued
/// through one store (or its clones) run one at a time. Separate stores over
/// the same backend are not coordinated, and the last write wins.
#[derive(Clone)]
pub struct BookmarkStore {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
    events: broadcast::Sender<BookmarkEvent>,
}

impl BookmarkStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
            events,
        }
    }

    /// Returns the persisted records. Absent or malformed data reads as an
    /// empty list.
    pub async fn list(&self) -> Vec<BookmarkRecord> {
        self.load().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to read saved locations: {}", e);
            Vec::new()
        })
    }

    /// Saves `record` at the front, replacing any record with the same id.
    pub async fn add(&self, record: BookmarkRecord) {
        let _guard = self.write_lock.lock().await;

        let mut records = match self.load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Not saving {}, failed to read saved locations: {}", record.id, e);
                return;
            }
        };
        records.retain(|r| r.id != record.id);
        let id = record.id.clone();
        records.insert(0, record);

        if self.persist(&records).await {
            tracing::debug!("Saved location {}", id);
            let _ = self.events.send(BookmarkEvent::Added(id));
        }
    }

    /// Removes every record with `id`. Removing an unknown id does nothing.
    pub async fn remove(&self, id: &str) {
        let _guard = self.write_lock.lock().await;

        let mut records = match self.load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Not removing {}, failed to read saved locations: {}", id, e);
                return;
            }
        };
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return;
        }

        if self.persist(&records).await {
            tracing::debug!("Removed saved location {}", id);
            let _ = self.events.send(BookmarkEvent::Removed(id.to_string()));
        }
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.list().await.iter().any(|r| r.id == id)
    }

    /// Receives an event for each persisted mutation made through this store
    /// or its clones.
    pub fn subscribe(&self) -> broadcast::Receiver<BookmarkEvent> {
        self.events.subscribe()
    }

    /// Absent or malformed data is an empty list; only backend errors fail.
    async fn load(&self) -> Result<Vec<BookmarkRecord>, KvError> {
        Ok(match self.kv.get(BOOKMARKS_KEY).await? {
            Some(raw) => decode(&raw),
            None => Vec::new(),
        })
    }

    async fn persist(&self, records: &[BookmarkRecord]) -> bool {
        let raw = match serde_json::to_string(records) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to encode saved locations: {}", e);
                return false;
            }
        };

        match self.kv.set(BOOKMARKS_KEY, &raw).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save locations list: {}", e);
                false
            }
        }
    }
}

/// Decodes the blob. Non-array data is empty, undecodable entries are
/// skipped, and only the first record of each id is kept.
fn decode(raw: &str) -> Vec<BookmarkRecord> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::debug!("Ignoring saved locations blob that is not a list");
            return Vec::new();
        }
        Err(e) => {
            tracing::debug!("Ignoring malformed saved locations blob: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<BookmarkRecord>(item).ok())
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_db, MemoryKvStore, SqliteKvStore};
    use crate::models::Coords;
    use async_trait::async_trait;
    use tempfile::TempDir;

    /// Hands control back to the scheduler around every backend call, so
    /// unserialized read-modify-write cycles interleave and lose records.
    struct YieldingKv(MemoryKvStore);

    #[async_trait]
    impl KeyValueStore for YieldingKv {
        async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
            let value = self.0.get(key).await;
            tokio::task::yield_now().await;
            value
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
            tokio::task::yield_now().await;
            self.0.set(key, value).await
        }
    }

    fn setup() -> (BookmarkStore, MemoryKvStore) {
        let kv = MemoryKvStore::new();
        (BookmarkStore::new(Arc::new(kv.clone())), kv)
    }

    fn record(id: &str) -> BookmarkRecord {
        BookmarkRecord::new(id, format!("{} park", id), Coords::new(50.0, -100.0))
    }

    fn ids(records: &[BookmarkRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_empty_without_blob() {
        let (store, _kv) = setup();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_orders_most_recent_first() {
        let (store, _kv) = setup();

        store.add(record("a")).await;
        store.add(record("b")).await;
        store.add(record("c")).await;

        assert_eq!(ids(&store.list().await), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_readd_moves_to_front_with_new_fields() {
        let (store, _kv) = setup();

        store.add(record("a")).await;
        store.add(record("b")).await;
        store.add(record("c")).await;

        let updated = BookmarkRecord::new("a", "Renamed", Coords::new(1.0, 2.0));
        store.add(updated.clone()).await;

        let list = store.list().await;
        assert_eq!(list.len(), 3);
        assert_eq!(ids(&list), vec!["a", "c", "b"]);
        assert_eq!(list[0], updated);
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip() {
        let (store, _kv) = setup();
        let r = record("banff");

        store.add(r.clone()).await;
        assert!(store.list().await.contains(&r));

        store.remove(&r.id).await;
        assert!(!store.list().await.iter().any(|x| x.id == r.id));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (store, kv) = setup();
        store.add(record("a")).await;
        store.add(record("b")).await;

        store.remove("a").await;
        let once = kv.raw(BOOKMARKS_KEY).await;

        store.remove("a").await;
        let twice = kv.raw(BOOKMARKS_KEY).await;

        assert_eq!(once, twice);
        assert_eq!(ids(&store.list().await), vec!["b"]);
    }

    #[tokio::test]
    async fn test_remove_absent_id_is_noop() {
        let (store, _kv) = setup();
        store.remove("nothing").await;
        assert!(store.list().await.is_empty());

        store.add(record("a")).await;
        store.remove("nothing").await;
        assert_eq!(ids(&store.list().await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_no_duplicates_after_mixed_operations() {
        let (store, _kv) = setup();
        let script = [
            ("add", "a"),
            ("add", "b"),
            ("add", "a"),
            ("remove", "b"),
            ("add", "c"),
            ("add", "b"),
            ("add", "c"),
            ("remove", "x"),
            ("add", "a"),
        ];

        for (op, id) in script {
            match op {
                "add" => store.add(record(id)).await,
                _ => store.remove(id).await,
            }
            let list = store.list().await;
            let unique: HashSet<&str> = list.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(unique.len(), list.len());
        }

        assert_eq!(ids(&store.list().await), vec!["a", "c", "b"]);
    }

    #[tokio::test]
    async fn test_contains() {
        let (store, _kv) = setup();
        assert!(!store.contains("a").await);

        store.add(record("a")).await;
        assert!(store.contains("a").await);
        assert!(!store.contains("b").await);

        store.remove("a").await;
        assert!(!store.contains("a").await);
    }

    #[tokio::test]
    async fn test_malformed_blob_reads_as_empty() {
        let (store, kv) = setup();

        for raw in ["not json", "{\"id\": \"a\"}", "null", "\"banff\"", "3"] {
            kv.insert_raw(BOOKMARKS_KEY, raw).await;
            assert!(store.list().await.is_empty(), "blob: {:?}", raw);
        }
    }

    #[tokio::test]
    async fn test_malformed_blob_is_replaced_on_add() {
        let (store, kv) = setup();
        kv.insert_raw(BOOKMARKS_KEY, "{broken").await;

        store.add(record("a")).await;

        assert_eq!(ids(&store.list().await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_undecodable_entries_are_skipped() {
        let (store, kv) = setup();
        kv.insert_raw(
            BOOKMARKS_KEY,
            r#"[{"id": "a", "title": "A"}, 5, {"title": "no id"}, {"id": "b", "coords": {"lat": 1, "lng": 2}}]"#,
        )
        .await;

        let list = store.list().await;
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert_eq!(list[0].coords, Coords::default());
        assert_eq!(list[1].title, "");
        assert_eq!(list[1].coords, Coords::new(1.0, 2.0));
    }

    #[tokio::test]
    async fn test_duplicate_ids_in_blob_keep_first() {
        let (store, kv) = setup();
        kv.insert_raw(
            BOOKMARKS_KEY,
            r#"[{"id": "a", "title": "new"}, {"id": "b"}, {"id": "a", "title": "old"}]"#,
        )
        .await;

        let list = store.list().await;
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert_eq!(list[0].title, "new");
    }

    #[tokio::test]
    async fn test_persisted_layout() {
        let (store, kv) = setup();
        store
            .add(BookmarkRecord::new("pei", "PEI", Coords::new(46.5, -63.5)))
            .await;

        let raw: Value = serde_json::from_str(&kv.raw(BOOKMARKS_KEY).await.unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([
                {"id": "pei", "title": "PEI", "coords": {"lat": 46.5, "lng": -63.5}}
            ])
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_silent() {
        let (store, kv) = setup();
        store.add(record("a")).await;

        kv.set_fail_writes(true);
        store.add(record("b")).await;
        store.remove("a").await;

        assert_eq!(ids(&store.list().await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_read_failure_lists_empty() {
        let (store, kv) = setup();
        store.add(record("a")).await;

        kv.set_fail_reads(true);
        assert!(store.list().await.is_empty());
        assert!(!store.contains("a").await);
    }

    #[tokio::test]
    async fn test_read_failure_does_not_overwrite_saved_list() {
        let (store, kv) = setup();
        store.add(record("a")).await;
        store.add(record("b")).await;
        let mut events = store.subscribe();

        kv.set_fail_reads(true);
        store.add(record("c")).await;
        store.remove("a").await;
        kv.set_fail_reads(false);

        assert_eq!(ids(&store.list().await), vec!["b", "a"]);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_events_follow_persisted_mutations() {
        let (store, kv) = setup();
        let mut events = store.subscribe();

        store.add(record("a")).await;
        store.remove("missing").await;
        store.remove("a").await;

        kv.set_fail_writes(true);
        store.add(record("b")).await;

        assert_eq!(events.try_recv().unwrap(), BookmarkEvent::Added("a".into()));
        assert_eq!(events.try_recv().unwrap(), BookmarkEvent::Removed("a".into()));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_on_one_store_are_serialized() {
        let store = BookmarkStore::new(Arc::new(YieldingKv(MemoryKvStore::new())));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.add(record(&format!("park{}", i))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list().await.len(), 20);
    }

    #[tokio::test]
    async fn test_stores_sharing_a_backend_see_each_other() {
        let kv = MemoryKvStore::new();
        let detail = BookmarkStore::new(Arc::new(kv.clone()));
        let saved = BookmarkStore::new(Arc::new(kv));

        detail.add(record("a")).await;
        assert!(saved.contains("a").await);

        saved.remove("a").await;
        assert!(!detail.contains("a").await);
    }

    #[tokio::test]
    async fn test_sqlite_backed_store() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_dir.path().join("test.db")).await.unwrap();
        let store = BookmarkStore::new(Arc::new(SqliteKvStore::new(pool.clone())));

        store.add(record("a")).await;
        store.add(record("b")).await;
        store.remove("a").await;

        let reopened = BookmarkStore::new(Arc::new(SqliteKvStore::new(pool)));
        assert_eq!(ids(&reopened.list().await), vec!["b"]);
    }
}
