use crate::scaffolding::domain::model::{
    commands::generate_scaffold_command::TableAttributeParts,
    entities::table_attribute::TableAttribute,
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::table_draft_id::TableDraftId,
};

#[derive(Clone, Debug)]
pub struct AddTableAttributeCommand {
    draft_id: TableDraftId,
    attribute: TableAttribute,
}

impl AddTableAttributeCommand {
    pub fn new(
        draft_id: String,
        parts: TableAttributeParts,
    ) -> Result<Self, ScaffoldingDomainError> {
        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
            attribute: TableAttribute::new(
                parts.name,
                parts.sql_type,
                parts.is_primary,
                parts.is_identity,
                parts.column_name,
            )?,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }

    pub fn attribute(&self) -> &TableAttribute {
        &self.attribute
    }
}
