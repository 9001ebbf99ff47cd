use crate::scaffolding::domain::model::{
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::table_draft_id::TableDraftId,
};

#[derive(Clone, Debug)]
pub struct GetGeneratedUnitQuery {
    draft_id: TableDraftId,
    filename: String,
}

impl GetGeneratedUnitQuery {
    pub fn new(draft_id: String, filename: String) -> Result<Self, ScaffoldingDomainError> {
        let filename = filename.trim().to_string();
        if filename.is_empty() {
            return Err(ScaffoldingDomainError::InvalidIdentifier);
        }

        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
            filename,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}
