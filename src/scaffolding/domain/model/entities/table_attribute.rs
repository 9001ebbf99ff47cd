use crate::scaffolding::domain::model::{
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::{
        attribute_id::AttributeId,
        attribute_name::{AttributeName, sanitize_column_name},
        sql_type::SqlType,
    },
};

/// One column of the described table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableAttribute {
    id: AttributeId,
    name: AttributeName,
    sql_type: SqlType,
    is_primary: bool,
    is_identity: bool,
    column_name: String,
}

impl TableAttribute {
    pub fn new(
        name: String,
        sql_type: String,
        is_primary: bool,
        is_identity: bool,
        column_name: Option<String>,
    ) -> Result<Self, ScaffoldingDomainError> {
        let name = AttributeName::new(name)?;
        let column_name = column_name
            .map(|value| sanitize_column_name(&value))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| name.value().to_string());

        Ok(Self {
            id: AttributeId::new_random(),
            name,
            sql_type: SqlType::new(sql_type),
            is_primary,
            is_identity,
            column_name,
        })
    }

    pub fn id(&self) -> AttributeId {
        self.id
    }

    pub fn name(&self) -> &AttributeName {
        &self.name
    }

    pub fn sql_type(&self) -> &SqlType {
        &self.sql_type
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Physical column name; equals the attribute name unless overridden.
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn set_primary(&mut self, is_primary: bool) {
        self.is_primary = is_primary;
        if !is_primary {
            self.is_identity = false;
        }
    }

    pub fn set_identity(&mut self, is_identity: bool) {
        self.is_identity = is_identity;
    }
}
