use crate::scaffolding::domain::model::{
    enums::{
        scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
    },
    value_objects::table_draft_id::TableDraftId,
};

#[derive(Clone, Debug)]
pub struct UpdateTableDraftCommand {
    draft_id: TableDraftId,
    table_name: Option<String>,
    category: Option<ScaffoldCategory>,
}

impl UpdateTableDraftCommand {
    pub fn new(
        draft_id: String,
        table_name: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ScaffoldingDomainError> {
        Ok(Self {
            draft_id: TableDraftId::new(draft_id)?,
            table_name,
            category: category
                .map(|raw| raw.parse::<ScaffoldCategory>())
                .transpose()?,
        })
    }

    pub fn draft_id(&self) -> TableDraftId {
        self.draft_id
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn category(&self) -> Option<ScaffoldCategory> {
        self.category
    }
}
