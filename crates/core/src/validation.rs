//! Field-level validation vocabulary.
//!
//! Validators are static: each field carries a fixed, ordered list of
//! `(Rule, Check)` pairs. Evaluation of a field stops at its first failing rule,
//! while violations across fields are all collected.

use serde::Serialize;

/// Named validation rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present (non-empty).
    Required,
    /// Numeric value must be strictly greater than zero.
    GreaterThanZero,
    /// Value must be a three-segment SKU (`abc-def-ghi`).
    Sku,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::GreaterThanZero => "greater_than_zero",
            Rule::Sku => "sku",
        }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed constraint: which field, which rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

/// Non-empty list of field violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// True when `field` failed (any rule).
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// The rule `field` failed on, if any.
    pub fn rule_for(&self, field: &str) -> Option<Rule> {
        self.0.iter().find(|v| v.field == field).map(|v| v.rule)
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, v) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.rule)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Predicate behind a [`Rule`]; returns `true` when the value passes.
pub type Check<T> = fn(&T) -> bool;

/// Accumulates violations across fields.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `rules` against `value` in order, recording the first failure.
    pub fn field<T: ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        rules: &[(Rule, Check<T>)],
    ) -> &mut Self {
        if let Some((rule, _)) = rules.iter().find(|(_, check)| !check(value)) {
            self.violations.push(FieldViolation { field, rule: *rule });
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.violations)))
        }
    }
}
