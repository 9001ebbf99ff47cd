use crate::scaffolding::domain::model::{
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::table_draft_id::TableDraftId,
};

#[derive(Clone, Debug)]
pub struct DeleteTableDraftCommand {
    draft_id: TableDraftId,
}

impl DeleteTableDraftCommand {
    pub fn new(draft_id: String) -> Result<Self, ScaffoldingDomainError> {
        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }
}
