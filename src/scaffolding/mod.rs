use std::sync::Arc;

use axum::Router;
use chrono::Duration;
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    scaffolding::{
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
        infrastructure::{
            persistence::repositories::in_memory::in_memory_table_draft_repository_impl::InMemoryTableDraftRepositoryImpl,
            templates::{
                embedded_template_repository_impl::EmbeddedTemplateRepositoryImpl,
                file_system_template_repository_impl::FileSystemTemplateRepositoryImpl,
                template_repository::TemplateRepository,
            },
        },
        interfaces::rest::controllers::scaffolding_rest_controller::{
            ScaffoldingRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_scaffolding_router(config: &AppConfig) -> Result<Router, String> {
    let template_repository: Arc<dyn TemplateRepository> = match &config.template_dir {
        Some(directory) => {
            let metadata = tokio::fs::metadata(directory)
                .await
                .map_err(|e| format!("template directory {directory}: {e}"))?;
            if !metadata.is_dir() {
                return Err(format!("template directory {directory} is not a directory"));
            }
            info!(directory = %directory, "loading scaffolding templates from disk");
            Arc::new(FileSystemTemplateRepositoryImpl::new(directory.clone()))
        }
        None => Arc::new(EmbeddedTemplateRepositoryImpl::new()),
    };

    let draft_repository = Arc::new(InMemoryTableDraftRepositoryImpl::new(Duration::minutes(
        config.draft_idle_minutes,
    )));

    let generation_service = Arc::new(ScaffoldGenerationCommandServiceImpl::new(
        template_repository,
    ));
    let draft_command_service = Arc::new(TableDraftCommandServiceImpl::new(
        draft_repository.clone(),
        generation_service.clone(),
    ));
    let draft_query_service = Arc::new(TableDraftQueryServiceImpl::new(draft_repository));
    let catalog_query_service = Arc::new(ScaffoldCatalogQueryServiceImpl::new());

    Ok(router(ScaffoldingRestControllerState {
        generation_service,
        draft_command_service,
        draft_query_service,
        catalog_query_service,
    }))
}
