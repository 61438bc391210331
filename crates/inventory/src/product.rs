use serde::{Deserialize, Serialize};

use shelfstock_core::{DomainError, DomainResult, ProductId};

/// Value record: a single product entry.
///
/// Serialized in camelCase so the persisted form is exactly
/// `{"id": ..., "name": ..., "price": ..., "imageUri": ...}`.
///
/// Construction goes through [`Product::new`], which enforces the boundary
/// rules. Deserialization rehydrates our own persisted mirror and does not
/// re-validate; the mirror has a single writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    image_uri: String,
}

impl Product {
    /// Validate and create a product with a freshly generated id.
    ///
    /// Rejected before any inventory state is touched:
    /// - name empty after trimming
    /// - price not finite or not strictly positive
    /// - image reference empty
    pub fn new(
        name: impl Into<String>,
        price: f64,
        image_uri: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, price, image_uri)
    }

    /// Validate and create a product with an explicit id (tests, callers
    /// that generate ids themselves).
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        image_uri: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let image_uri = image_uri.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::validation("price must be positive"));
        }
        if image_uri.trim().is_empty() {
            return Err(DomainError::validation("image reference is required"));
        }

        Ok(Self {
            id,
            name,
            price,
            image_uri,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Opaque reference to a locally stored image; not checked for existence.
    pub fn image_uri(&self) -> &str {
        &self.image_uri
    }
}
