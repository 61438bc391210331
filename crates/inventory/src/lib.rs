//! Inventory domain module.
//!
//! This crate contains the business rules for the bounded product shelf,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod product;
pub mod shelf;

pub use product::Product;
pub use shelf::{AddOutcome, Shelf, MAX_PRODUCTS};
