use std::collections::HashSet;

use crate::scaffolding::domain::model::{
    entities::table_attribute::TableAttribute,
    enums::{
        scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
    },
    value_objects::table_name::TableName,
};

/// Validated, immutable input of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDescription {
    table_name: TableName,
    category: ScaffoldCategory,
    attributes: Vec<TableAttribute>,
}

impl TableDescription {
    pub fn new(
        table_name: TableName,
        category: ScaffoldCategory,
        attributes: Vec<TableAttribute>,
    ) -> Result<Self, ScaffoldingDomainError> {
        if attributes.is_empty() {
            return Err(ScaffoldingDomainError::MissingAttributes);
        }

        if attributes.iter().filter(|a| a.is_identity()).count() > 1 {
            return Err(ScaffoldingDomainError::MultipleIdentityAttributes);
        }

        let mut seen = HashSet::new();
        if !attributes
            .iter()
            .all(|a| seen.insert(a.name().value().to_lowercase()))
        {
            return Err(ScaffoldingDomainError::DuplicateAttributeNames);
        }

        if let Some(identity) = attributes.iter().find(|a| a.is_identity()) {
            if !identity.is_primary() {
                return Err(ScaffoldingDomainError::IdentityRequiresPrimaryKey);
            }
            if !identity.sql_type().is_identity_capable() {
                return Err(ScaffoldingDomainError::IdentityRequiresIntegerType);
            }
        }

        if !attributes.iter().any(|a| a.is_primary()) {
            return Err(ScaffoldingDomainError::MissingPrimaryKey);
        }

        Ok(Self {
            table_name,
            category,
            attributes,
        })
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }

    pub fn category(&self) -> ScaffoldCategory {
        self.category
    }

    pub fn attributes(&self) -> &[TableAttribute] {
        &self.attributes
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &TableAttribute> {
        self.attributes.iter().filter(|a| a.is_primary())
    }

    pub fn identity_attribute(&self) -> Option<&TableAttribute> {
        self.attributes.iter().find(|a| a.is_identity())
    }
}
