use serde::{Deserialize, Serialize};

use shelfstock_core::ProductId;

use crate::product::Product;

/// Fixed capacity of the personal shelf.
pub const MAX_PRODUCTS: usize = 5;

/// Outcome of attempting to add a product.
///
/// The reference behavior reports both "accepted as the final slot" and
/// "rejected, already full" through the same limit notification, keyed by the
/// submitted product's name (for the rejected case that is the name of a
/// product that was never added). The variants keep the three cases distinct;
/// how they collapse into user-facing notifications is the sink's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    /// Accepted with spare capacity remaining.
    Added { name: String, count: usize },
    /// Accepted as the final slot; the shelf is now at capacity.
    AddedAtCapacity { name: String },
    /// Rejected because the shelf was already at capacity; nothing changed.
    Rejected { name: String },
}

impl AddOutcome {
    /// Whether the product was actually appended.
    pub fn accepted(&self) -> bool {
        !matches!(self, AddOutcome::Rejected { .. })
    }

    /// Name of the product the outcome refers to.
    pub fn name(&self) -> &str {
        match self {
            AddOutcome::Added { name, .. }
            | AddOutcome::AddedAtCapacity { name }
            | AddOutcome::Rejected { name } => name,
        }
    }
}

/// Bounded, insertion-ordered product collection.
///
/// Pure domain state: no IO. Holds at most [`MAX_PRODUCTS`] entries; ids are
/// trusted to be unique (the caller generates them), and removal preserves
/// the relative order of survivors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shelf {
    items: Vec<Product>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from a persisted snapshot.
    ///
    /// The snapshot is our own mirror (single writer), so entries are
    /// trusted as-is.
    pub fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// Attempt to append a product, enforcing the capacity rule.
    ///
    /// At capacity the shelf is left untouched and the outcome carries the
    /// rejected product's name.
    pub fn push(&mut self, product: Product) -> AddOutcome {
        if self.items.len() >= MAX_PRODUCTS {
            return AddOutcome::Rejected {
                name: product.name().to_string(),
            };
        }

        let name = product.name().to_string();
        self.items.push(product);
        let count = self.items.len();

        if count == MAX_PRODUCTS {
            AddOutcome::AddedAtCapacity { name }
        } else {
            AddOutcome::Added { name, count }
        }
    }

    /// Remove the product with the given id. Returns whether anything was
    /// removed; an absent id is a silent no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id() != id);
        self.items.len() != before
    }

    /// Derived state: recomputed from the length on every observation,
    /// never stored (avoids drift).
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_PRODUCTS
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
