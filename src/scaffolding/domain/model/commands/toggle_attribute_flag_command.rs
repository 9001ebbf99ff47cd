use crate::scaffolding::domain::model::{
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::{attribute_id::AttributeId, table_draft_id::TableDraftId},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeFlag {
    PrimaryKey,
    Identity,
}

#[derive(Clone, Debug)]
pub struct ToggleAttributeFlagCommand {
    draft_id: TableDraftId,
    attribute_id: AttributeId,
    flag: AttributeFlag,
}

impl ToggleAttributeFlagCommand {
    pub fn new(
        draft_id: String,
        attribute_id: String,
        flag: AttributeFlag,
    ) -> Result<Self, ScaffoldingDomainError> {
        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
            attribute_id: AttributeId::new(attribute_id)?,
            flag,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }

    pub fn attribute_id(&self) -> AttributeId {
        self.attribute_id
    }

    pub fn flag(&self) -> AttributeFlag {
        self.flag
    }
}
