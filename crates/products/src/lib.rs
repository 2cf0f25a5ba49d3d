//! Products domain module.
//!
//! This crate contains the catalog record, its validation rules and the
//! in-memory store that owns the ordered product collection (no IO, no HTTP).

pub mod product;
pub mod store;

pub use product::{Product, is_valid_sku};
pub use store::ProductStore;
