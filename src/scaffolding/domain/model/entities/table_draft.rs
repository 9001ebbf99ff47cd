use chrono::{DateTime, Utc};

use crate::scaffolding::domain::model::{
    entities::{
        generated_unit::GeneratedUnit, table_attribute::TableAttribute,
        table_description::TableDescription,
    },
    enums::{
        scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
    },
    value_objects::{attribute_id::AttributeId, table_draft_id::TableDraftId, table_name::TableName},
};

/// Form state of a table being described. Every mutation either succeeds
/// completely or leaves the draft untouched.
#[derive(Clone, Debug)]
pub struct TableDraft {
    id: TableDraftId,
    table_name: String,
    category: ScaffoldCategory,
    attributes: Vec<TableAttribute>,
    generated_units: Vec<GeneratedUnit>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TableDraft {
    pub fn new(table_name: String, category: ScaffoldCategory, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TableDraftId::new_random(),
            table_name: table_name.trim().to_string(),
            category,
            attributes: Vec::new(),
            generated_units: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    pub fn add_attribute(
        &mut self,
        attribute: TableAttribute,
    ) -> Result<AttributeId, ScaffoldingDomainError> {
        if self
            .attributes
            .iter()
            .any(|existing| existing.name().same_as(attribute.name()))
        {
            return Err(ScaffoldingDomainError::DuplicateAttributeName(
                attribute.name().value().to_string(),
            ));
        }

        if attribute.is_identity() {
            if !attribute.is_primary() {
                return Err(ScaffoldingDomainError::IdentityRequiresPrimaryKey);
            }
            if !attribute.sql_type().is_identity_capable() {
                return Err(ScaffoldingDomainError::IdentityRequiresIntegerType);
            }
            self.clear_identity();
        }

        let id = attribute.id();
        self.attributes.push(attribute);
        self.touch();
        Ok(id)
    }

    pub fn remove_attribute(&mut self, id: AttributeId) -> Result<(), ScaffoldingDomainError> {
        let position = self.position_of(id)?;
        self.attributes.remove(position);
        self.touch();
        Ok(())
    }

    pub fn toggle_primary(&mut self, id: AttributeId) -> Result<(), ScaffoldingDomainError> {
        let position = self.position_of(id)?;
        let attribute = &mut self.attributes[position];
        let is_primary = !attribute.is_primary();
        attribute.set_primary(is_primary);
        self.touch();
        Ok(())
    }

    /// Turning identity on clears it everywhere else; at most one stays set.
    pub fn toggle_identity(&mut self, id: AttributeId) -> Result<(), ScaffoldingDomainError> {
        let position = self.position_of(id)?;
        let target = &self.attributes[position];

        if target.is_identity() {
            self.attributes[position].set_identity(false);
        } else {
            if !target.is_primary() {
                return Err(ScaffoldingDomainError::IdentityRequiresPrimaryKey);
            }
            if !target.sql_type().is_identity_capable() {
                return Err(ScaffoldingDomainError::IdentityRequiresIntegerType);
            }
            self.clear_identity();
            self.attributes[position].set_identity(true);
        }

        self.touch();
        Ok(())
    }

    pub fn rename(&mut self, table_name: String) {
        self.table_name = table_name.trim().to_string();
        self.touch();
    }

    pub fn change_category(&mut self, category: ScaffoldCategory) {
        self.category = category;
        self.touch();
    }

    /// Snapshot of the draft as generation input; fails on any violated invariant.
    pub fn describe(&self) -> Result<TableDescription, ScaffoldingDomainError> {
        TableDescription::new(
            TableName::new(self.table_name.clone())?,
            self.category,
            self.attributes.clone(),
        )
    }

    pub fn record_generation(&mut self, units: Vec<GeneratedUnit>) {
        self.generated_units = units;
        self.touch();
    }

    pub fn find_generated_unit(&self, filename: &str) -> Option<&GeneratedUnit> {
        self.generated_units
            .iter()
            .find(|unit| unit.filename == filename)
    }

    pub fn id(&self) -> TableDraftId {
        self.id
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn category(&self) -> ScaffoldCategory {
        self.category
    }

    pub fn attributes(&self) -> &[TableAttribute] {
        &self.attributes
    }

    pub fn generated_units(&self) -> &[GeneratedUnit] {
        &self.generated_units
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn position_of(&self, id: AttributeId) -> Result<usize, ScaffoldingDomainError> {
        self.attributes
            .iter()
            .position(|a| a.id() == id)
            .ok_or(ScaffoldingDomainError::AttributeNotFound)
    }

    fn clear_identity(&mut self) {
        for attribute in &mut self.attributes {
            attribute.set_identity(false);
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
