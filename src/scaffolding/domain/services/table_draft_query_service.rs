use async_trait::async_trait;

use crate::scaffolding::domain::model::{
    entities::{generated_unit::GeneratedUnit, table_draft::TableDraft},
    enums::scaffolding_domain_error::ScaffoldingDomainError,
    queries::{
        get_generated_unit_query::GetGeneratedUnitQuery, get_table_draft_query::GetTableDraftQuery,
    },
};

#[async_trait]
pub trait TableDraftQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetTableDraftQuery,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_get_generated_unit(
        &self,
        query: GetGeneratedUnitQuery,
    ) -> Result<GeneratedUnit, ScaffoldingDomainError>;
}
