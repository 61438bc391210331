//! Integration tests for the full inventory flow.
//!
//! Tests: Product validation → InventoryStore → KeyValueStore → NotificationSink
//!
//! Verifies:
//! - The capacity scenario end to end (4 adds, the 5th, the rejected 6th)
//! - Hydration across a simulated restart, including file-backed storage
//! - Storage failures never reach the caller

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use shelfstock_inventory::{AddOutcome, Product, MAX_PRODUCTS};
    use shelfstock_notify::{Notification, NotificationSink, RecordingSink, TracingSink};

    use crate::inventory_store::{InventoryStore, STORAGE_KEY};
    use crate::json_file::JsonFileStore;
    use crate::kv::{KeyValueStore, StorageError};
    use crate::memory::InMemoryKvStore;

    /// Store double whose reads and writes always fail.
    struct FailingKvStore;

    #[async_trait]
    impl KeyValueStore for FailingKvStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::backend("simulated read failure"))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::backend("simulated write failure"))
        }
    }

    fn init_logging() {
        shelfstock_observability::init();
    }

    fn product(name: &str) -> Product {
        Product::new(name, 19.99, "file:///photos/item.jpg").unwrap()
    }

    #[tokio::test]
    async fn capacity_scenario_end_to_end() {
        init_logging();

        let sink = RecordingSink::new();
        // Log-rendered alongside the recording sink, the way a host would
        // fan outcomes out to its toast layer.
        let toasts = TracingSink::new();
        let mut store = InventoryStore::new(InMemoryKvStore::new());
        store.load().await;

        for i in 1..=4 {
            let outcome = store.add(product(&format!("product-{i}"))).await;
            sink.deliver(&outcome);
            toasts.deliver(&outcome);
            assert!(outcome.accepted());
        }
        assert!(!store.max_reached());

        let fifth = store.add(product("product-5")).await;
        sink.deliver(&fifth);
        toasts.deliver(&fifth);
        assert_eq!(
            fifth,
            AddOutcome::AddedAtCapacity {
                name: "product-5".to_string()
            }
        );
        assert_eq!(store.len(), MAX_PRODUCTS);
        assert!(store.max_reached());

        let sixth = store.add(product("product-6")).await;
        sink.deliver(&sixth);
        toasts.deliver(&sixth);
        assert_eq!(
            sixth,
            AddOutcome::Rejected {
                name: "product-6".to_string()
            }
        );
        assert_eq!(store.len(), MAX_PRODUCTS);

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 6);
        assert_eq!(
            recorded[3],
            Notification::Added {
                name: "product-4".to_string(),
                count: 4
            }
        );
        // Both the accepted 5th and the rejected 6th surface as the limit
        // notification, each keyed by its own product's name.
        assert_eq!(
            recorded[4],
            Notification::LimitReached {
                name: "product-5".to_string()
            }
        );
        assert_eq!(
            recorded[5],
            Notification::LimitReached {
                name: "product-6".to_string()
            }
        );
    }

    #[tokio::test]
    async fn restart_rehydrates_from_the_file_store() {
        init_logging();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelfstock.json");

        let mut store = InventoryStore::new(JsonFileStore::new(&path));
        store.load().await;
        store.add(product("lamp")).await;
        store.add(product("mug")).await;
        store.remove(store.products()[0].id()).await;
        let expected = store.products().to_vec();
        drop(store);

        let mut reopened = InventoryStore::new(JsonFileStore::new(&path));
        reopened.load().await;
        assert_eq!(reopened.products(), expected.as_slice());
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.products()[0].name(), "mug");
    }

    #[tokio::test]
    async fn read_failure_hydrates_empty_without_error() {
        init_logging();

        let mut store = InventoryStore::new(FailingKvStore);
        store.load().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn write_failure_keeps_in_memory_state_authoritative() {
        init_logging();

        let mut store = InventoryStore::new(FailingKvStore);
        store.load().await;

        let outcome = store.add(product("ephemeral")).await;
        assert!(outcome.accepted());
        assert_eq!(store.len(), 1);
        assert_eq!(store.products()[0].name(), "ephemeral");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        init_logging();

        let kv = Arc::new(InMemoryKvStore::new());
        let mut store = InventoryStore::new(kv.clone());
        store.load().await;

        // Boundary validation rejects the draft before a Product exists, so
        // there is nothing to hand to add(); the store and its mirror stay
        // untouched.
        assert!(Product::new("", 10.0, "file:///p.jpg").is_err());
        assert!(Product::new("Mug", 0.0, "file:///p.jpg").is_err());
        assert!(Product::new("Mug", -1.0, "file:///p.jpg").is_err());
        assert!(Product::new("Mug", 10.0, "").is_err());

        assert!(store.is_empty());
        assert_eq!(kv.get(STORAGE_KEY).await.unwrap(), None);
    }
}
