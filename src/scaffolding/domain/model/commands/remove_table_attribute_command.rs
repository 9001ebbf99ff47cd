use crate::scaffolding::domain::model::{
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::{attribute_id::AttributeId, table_draft_id::TableDraftId},
};

#[derive(Clone, Debug)]
pub struct RemoveTableAttributeCommand {
    draft_id: TableDraftId,
    attribute_id: AttributeId,
}

impl RemoveTableAttributeCommand {
    pub fn new(draft_id: String, attribute_id: String) -> Result<Self, ScaffoldingDomainError> {
        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
            attribute_id: AttributeId::new(attribute_id)?,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }

    pub fn attribute_id(&self) -> AttributeId {
        self.attribute_id
    }
}
