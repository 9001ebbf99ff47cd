use std::sync::Arc;

use async_trait::async_trait;

use crate::scaffolding::{
    domain::{
        model::{
            entities::{generated_unit::GeneratedUnit, table_draft::TableDraft},
            enums::scaffolding_domain_error::ScaffoldingDomainError,
            queries::{
                get_generated_unit_query::GetGeneratedUnitQuery,
                get_table_draft_query::GetTableDraftQuery,
            },
        },
        services::table_draft_query_service::TableDraftQueryService,
    },
    infrastructure::persistence::repositories::table_draft_repository::TableDraftRepository,
};

pub struct TableDraftQueryServiceImpl {
    draft_repository: Arc<dyn TableDraftRepository>,
}

impl TableDraftQueryServiceImpl {
    pub fn new(draft_repository: Arc<dyn TableDraftRepository>) -> Self {
        Self { draft_repository }
    }
}

#[async_trait]
impl TableDraftQueryService for TableDraftQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetTableDraftQuery,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        self.draft_repository
            .find_by_id(query.draft_id())
            .await?
            .ok_or(ScaffoldingDomainError::DraftNotFound)
    }

    async fn handle_get_generated_unit(
        &self,
        query: GetGeneratedUnitQuery,
    ) -> Result<GeneratedUnit, ScaffoldingDomainError> {
        let draft = self
            .draft_repository
            .find_by_id(query.draft_id())
            .await?
            .ok_or(ScaffoldingDomainError::DraftNotFound)?;

        draft
            .find_generated_unit(query.filename())
            .cloned()
            .ok_or_else(|| ScaffoldingDomainError::GeneratedUnitNotFound(query.filename().to_string()))
    }
}
