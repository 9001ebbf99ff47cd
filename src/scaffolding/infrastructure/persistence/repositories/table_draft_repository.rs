use async_trait::async_trait;

use crate::scaffolding::domain::model::{
    entities::table_draft::TableDraft, enums::scaffolding_domain_error::ScaffoldingDomainError,
    value_objects::table_draft_id::TableDraftId,
};

#[async_trait]
pub trait TableDraftRepository: Send + Sync {
    async fn save(&self, draft: &TableDraft) -> Result<(), ScaffoldingDomainError>;

    async fn find_by_id(
        &self,
        draft_id: TableDraftId,
    ) -> Result<Option<TableDraft>, ScaffoldingDomainError>;

    /// Returns whether a draft was removed.
    async fn delete(&self, draft_id: TableDraftId) -> Result<bool, ScaffoldingDomainError>;
}
