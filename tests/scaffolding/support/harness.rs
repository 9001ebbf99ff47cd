use std::sync::Arc;

use chrono::Duration;
use tier_scaffold_api::scaffolding::{
    application::{
        command_services::{
            scaffold_generation_command_service_impl::ScaffoldGenerationCommandServiceImpl,
            table_draft_command_service_impl::TableDraftCommandServiceImpl,
        },
        query_services::{
            scaffold_catalog_query_service_impl::ScaffoldCatalogQueryServiceImpl,
            table_draft_query_service_impl::TableDraftQueryServiceImpl,
        },
    },
    domain::model::enums::generated_unit_kind::GeneratedUnitKind,
    infrastructure::persistence::repositories::in_memory::in_memory_table_draft_repository_impl::InMemoryTableDraftRepositoryImpl,
    interfaces::rest::controllers::scaffolding_rest_controller::ScaffoldingRestControllerState,
};

use super::fakes::{FakeTableDraftRepository, FakeTemplateRepository};

pub struct ScaffoldingTestHarness {
    pub template_repository: Arc<FakeTemplateRepository>,
    pub draft_repository: Arc<FakeTableDraftRepository>,
    pub generation_service: Arc<ScaffoldGenerationCommandServiceImpl>,
    pub draft_service: TableDraftCommandServiceImpl,
    pub query_service: TableDraftQueryServiceImpl,
}

pub fn create_harness(missing_template: Option<GeneratedUnitKind>) -> ScaffoldingTestHarness {
    let template_repository = Arc::new(FakeTemplateRepository::new(missing_template));
    let draft_repository = Arc::new(FakeTableDraftRepository::new());

    let generation_service = Arc::new(ScaffoldGenerationCommandServiceImpl::new(
        template_repository.clone(),
    ));
    let draft_service =
        TableDraftCommandServiceImpl::new(draft_repository.clone(), generation_service.clone());
    let query_service = TableDraftQueryServiceImpl::new(draft_repository.clone());

    ScaffoldingTestHarness {
        template_repository,
        draft_repository,
        generation_service,
        draft_service,
        query_service,
    }
}

pub fn create_controller_state(
    missing_template: Option<GeneratedUnitKind>,
) -> ScaffoldingRestControllerState {
    let template_repository = Arc::new(FakeTemplateRepository::new(missing_template));
    let draft_repository = Arc::new(InMemoryTableDraftRepositoryImpl::new(Duration::hours(1)));

    let generation_service = Arc::new(ScaffoldGenerationCommandServiceImpl::new(
        template_repository,
    ));
    let draft_command_service = Arc::new(TableDraftCommandServiceImpl::new(
        draft_repository.clone(),
        generation_service.clone(),
    ));
    let draft_query_service = Arc::new(TableDraftQueryServiceImpl::new(draft_repository));

    ScaffoldingRestControllerState {
        generation_service,
        draft_command_service,
        draft_query_service,
        catalog_query_service: Arc::new(ScaffoldCatalogQueryServiceImpl::new()),
    }
}
