//! The inventory service: owns the shelf, synchronizes it to storage.

use shelfstock_core::ProductId;
use shelfstock_inventory::{AddOutcome, Product, Shelf};

use crate::kv::KeyValueStore;

/// Storage key the serialized product array lives under.
pub const STORAGE_KEY: &str = "PRODUCTS";

/// Owning component for the bounded product collection.
///
/// Holds the authoritative in-memory state; the key-value store carries a
/// durable serialized mirror, overwritten whole on every structural mutation
/// (last-writer-wins, single-writer scope). Mutations are visible to readers
/// as soon as they return, independent of whether the snapshot write
/// succeeded — a failed write is logged and the session continues on the
/// in-memory state.
///
/// Capacity and ordering rules live in [`Shelf`]; this type adds hydration
/// and snapshot persistence on top.
#[derive(Debug)]
pub struct InventoryStore<K> {
    shelf: Shelf,
    kv: K,
}

impl<K> InventoryStore<K>
where
    K: KeyValueStore,
{
    /// Create an empty store over `kv`. Call [`load`](Self::load) once at
    /// startup to hydrate the persisted mirror.
    pub fn new(kv: K) -> Self {
        Self {
            shelf: Shelf::new(),
            kv,
        }
    }

    /// Hydrate from storage, replacing the in-memory state entirely.
    ///
    /// Absent key, read failure, and decode failure all hydrate an empty
    /// shelf; nothing is surfaced to the caller (durability loss is silent
    /// by design).
    pub async fn load(&mut self) {
        let raw = match self.kv.get(STORAGE_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted inventory, starting empty");
                None
            }
        };

        let items = raw
            .and_then(|raw| match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted inventory is unreadable, starting empty");
                    None
                }
            })
            .unwrap_or_default();

        tracing::debug!(count = items.len(), "inventory hydrated");
        self.shelf = Shelf::from_items(items);
    }

    /// Attempt to add a product.
    ///
    /// The capacity rule is checked first; a rejected add changes neither
    /// memory nor storage. An accepted add is visible immediately and the
    /// full snapshot is persisted best-effort before returning. Exactly one
    /// outcome per call.
    pub async fn add(&mut self, product: Product) -> AddOutcome {
        let outcome = self.shelf.push(product);
        if outcome.accepted() {
            self.persist().await;
        }
        outcome
    }

    /// Remove the product with the given id and persist the filtered
    /// snapshot. An absent id is a silent no-op on the in-memory state; the
    /// snapshot is still rewritten. No notification on removal.
    pub async fn remove(&mut self, id: ProductId) {
        self.shelf.remove(id);
        self.persist().await;
    }

    /// Current products, insertion-ordered.
    pub fn products(&self) -> &[Product] {
        self.shelf.items()
    }

    /// Whether the capacity limit has been reached. Derived from the current
    /// length on every call.
    pub fn max_reached(&self) -> bool {
        self.shelf.is_full()
    }

    pub fn len(&self) -> usize {
        self.shelf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelf.is_empty()
    }

    async fn persist(&self) {
        let payload = match serde_json::to_string(self.shelf.items()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize inventory snapshot");
                return;
            }
        };
        match self.kv.set(STORAGE_KEY, &payload).await {
            Ok(()) => {
                tracing::debug!(count = self.shelf.len(), "inventory snapshot persisted");
            }
            Err(e) => {
                // In-memory state stays authoritative for the session.
                tracing::warn!(error = %e, "failed to persist inventory snapshot");
            }
        }
    }
}
