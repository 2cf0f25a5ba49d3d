use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_core::validation::{Check, Validator};
use catalog_core::{Entity, ProductId, Rule, ValidationErrors};

/// Three lowercase segments joined by dashes, e.g. `abc-def-ghi`.
///
/// Anchored: the whole value must be the single match.
static SKU_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+-[a-z]+-[a-z]+$").expect("sku pattern is a valid regex"));

const NAME_RULES: &[(Rule, Check<str>)] = &[(Rule::Required, required)];
const PRICE_RULES: &[(Rule, Check<f64>)] = &[(Rule::GreaterThanZero, greater_than_zero)];
const SKU_RULES: &[(Rule, Check<str>)] = &[(Rule::Required, required), (Rule::Sku, is_valid_sku)];

fn required(value: &str) -> bool {
    !value.is_empty()
}

fn greater_than_zero(value: &f64) -> bool {
    // NaN compares false and is rejected.
    *value > 0.0
}

/// `null` decodes like a missing field (empty string).
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when `value` is exactly one `abc-def-ghi` style SKU.
pub fn is_valid_sku(value: &str) -> bool {
    SKU_PATTERN.is_match(value)
}

/// Catalog record.
///
/// Missing JSON fields decode to their zero value; `validate` decides whether the
/// result is acceptable. Lifecycle timestamps are managed by the store and never
/// cross the JSON boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
    pub sku: String,
    #[serde(skip)]
    pub(crate) created_on: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub(crate) updated_on: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub(crate) deleted_on: Option<DateTime<Utc>>,
}

impl Product {
    /// New unsaved product (id is assigned by the store on add).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            sku: sku.into(),
            ..Self::default()
        }
    }

    /// Check every field constraint, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .field("name", self.name.as_str(), NAME_RULES)
            .field("price", &self.price, PRICE_RULES)
            .field("sku", self.sku.as_str(), SKU_RULES)
            .finish()
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn updated_on(&self) -> Option<DateTime<Utc>> {
        self.updated_on
    }

    pub fn deleted_on(&self) -> Option<DateTime<Utc>> {
        self.deleted_on
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
