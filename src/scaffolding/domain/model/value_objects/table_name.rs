use lazy_static::lazy_static;
use regex::Regex;

use crate::scaffolding::domain::model::enums::scaffolding_domain_error::ScaffoldingDomainError;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Table name as typed in the form, trimmed with inner whitespace turned into `_`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(value: String) -> Result<Self, ScaffoldingDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ScaffoldingDomainError::InvalidTableName);
        }

        Ok(Self(WHITESPACE_RUN.replace_all(trimmed, "_").into_owned()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
