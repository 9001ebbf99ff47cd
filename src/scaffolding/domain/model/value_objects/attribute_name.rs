use lazy_static::lazy_static;
use regex::Regex;

use crate::scaffolding::domain::model::enums::scaffolding_domain_error::ScaffoldingDomainError;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Trims and turns whitespace runs into `_`, so the result can appear in VB code.
pub fn sanitize_column_name(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value.trim(), "_").into_owned()
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttributeName(String);

impl AttributeName {
    pub fn new(value: String) -> Result<Self, ScaffoldingDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ScaffoldingDomainError::InvalidAttributeName);
        }

        Ok(Self(sanitize_column_name(trimmed)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Attribute names are compared case-insensitively within a table.
    pub fn same_as(&self, other: &AttributeName) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}
