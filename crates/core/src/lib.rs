//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, validation vocabulary, JSON codec and identifiers.

pub mod codec;
pub mod entity;
pub mod error;
pub mod id;
pub mod validation;

pub use codec::{DecodeError, EncodeError, from_json, to_json};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use validation::{FieldViolation, Rule, ValidationErrors};
