use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::scaffolding::{
    domain::{
        model::{
            commands::{
                add_table_attribute_command::AddTableAttributeCommand,
                create_table_draft_command::CreateTableDraftCommand,
                delete_table_draft_command::DeleteTableDraftCommand,
                generate_scaffold_command::GenerateScaffoldCommand,
                generate_table_draft_command::GenerateTableDraftCommand,
                remove_table_attribute_command::RemoveTableAttributeCommand,
                toggle_attribute_flag_command::{AttributeFlag, ToggleAttributeFlagCommand},
                update_table_draft_command::UpdateTableDraftCommand,
            },
            entities::generated_unit::GeneratedUnit,
            enums::scaffolding_domain_error::ScaffoldingDomainError,
            queries::{
                get_generated_unit_query::GetGeneratedUnitQuery,
                get_table_draft_query::GetTableDraftQuery,
            },
        },
        services::{
            scaffold_catalog_query_service::ScaffoldCatalogQueryService,
            scaffold_generation_command_service::ScaffoldGenerationCommandService,
            table_draft_command_service::TableDraftCommandService,
            table_draft_query_service::TableDraftQueryService,
        },
    },
    interfaces::rest::resources::{
        create_table_draft_request_resource::{
            CreateTableDraftRequestResource, UpdateTableDraftRequestResource,
        },
        generate_scaffold_request_resource::GenerateScaffoldRequestResource,
        generated_unit_resource::GeneratedUnitResource,
        scaffold_catalog_resource::ScaffoldCatalogResource,
        scaffolding_error_response_resource::ScaffoldingErrorResponseResource,
        table_attribute_request_resource::TableAttributeRequestResource,
        table_draft_resource::TableDraftResource,
    },
};

type ErrorResponse = (StatusCode, Json<ScaffoldingErrorResponseResource>);

#[derive(Clone)]
pub struct ScaffoldingRestControllerState {
    pub generation_service: Arc<dyn ScaffoldGenerationCommandService>,
    pub draft_command_service: Arc<dyn TableDraftCommandService>,
    pub draft_query_service: Arc<dyn TableDraftQueryService>,
    pub catalog_query_service: Arc<dyn ScaffoldCatalogQueryService>,
}

pub fn router(state: ScaffoldingRestControllerState) -> Router {
    Router::new()
        .route("/scaffolding/catalog", get(get_scaffold_catalog))
        .route("/scaffolding/generate", post(generate_scaffold))
        .route("/scaffolding/drafts", post(create_table_draft))
        .route(
            "/scaffolding/drafts/:draft_id",
            get(get_table_draft)
                .patch(update_table_draft)
                .delete(delete_table_draft),
        )
        .route(
            "/scaffolding/drafts/:draft_id/attributes",
            post(add_table_attribute),
        )
        .route(
            "/scaffolding/drafts/:draft_id/attributes/:attribute_id",
            delete(remove_table_attribute),
        )
        .route(
            "/scaffolding/drafts/:draft_id/attributes/:attribute_id/toggle-primary",
            post(toggle_attribute_primary_key),
        )
        .route(
            "/scaffolding/drafts/:draft_id/attributes/:attribute_id/toggle-identity",
            post(toggle_attribute_identity),
        )
        .route(
            "/scaffolding/drafts/:draft_id/generate",
            post(generate_table_draft),
        )
        .route(
            "/scaffolding/drafts/:draft_id/units/:filename",
            get(download_generated_unit),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/scaffolding/catalog",
    tag = "scaffolding",
    responses(
        (status = 200, description = "Categories and common SQL types", body = ScaffoldCatalogResource)
    )
)]
pub async fn get_scaffold_catalog(
    State(state): State<ScaffoldingRestControllerState>,
) -> Json<ScaffoldCatalogResource> {
    Json(state.catalog_query_service.handle_get_catalog().await.into())
}

#[utoipa::path(
    post,
    path = "/scaffolding/generate",
    tag = "scaffolding",
    request_body = GenerateScaffoldRequestResource,
    responses(
        (status = 200, description = "Generated fragments in fixed order", body = [GeneratedUnitResource]),
        (status = 400, description = "Invalid table description", body = ScaffoldingErrorResponseResource),
        (status = 500, description = "Template failure", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn generate_scaffold(
    State(state): State<ScaffoldingRestControllerState>,
    Json(request): Json<GenerateScaffoldRequestResource>,
) -> Result<Json<Vec<GeneratedUnitResource>>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command = GenerateScaffoldCommand::new(
        request.table_name,
        request.category,
        request.attributes.into_iter().map(Into::into).collect(),
    )
    .map_err(map_domain_error)?;

    let units = state
        .generation_service
        .handle_generate(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_unit_resources(units)))
}

#[utoipa::path(
    post,
    path = "/scaffolding/drafts",
    tag = "scaffolding",
    request_body = CreateTableDraftRequestResource,
    responses(
        (status = 201, description = "Draft created", body = TableDraftResource),
        (status = 400, description = "Invalid request", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn create_table_draft(
    State(state): State<ScaffoldingRestControllerState>,
    Json(request): Json<CreateTableDraftRequestResource>,
) -> Result<(StatusCode, Json<TableDraftResource>), ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command = CreateTableDraftCommand::new(request.table_name, request.category)
        .map_err(map_domain_error)?;

    let draft = state
        .draft_command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(TableDraftResource::from(&draft))))
}

#[utoipa::path(
    get,
    path = "/scaffolding/drafts/{draft_id}",
    tag = "scaffolding",
    params(("draft_id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 200, description = "Draft state", body = TableDraftResource),
        (status = 404, description = "Draft not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn get_table_draft(
    State(state): State<ScaffoldingRestControllerState>,
    Path(draft_id): Path<String>,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    let query = GetTableDraftQuery::new(draft_id).map_err(map_domain_error)?;

    let draft = state
        .draft_query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableDraftResource::from(&draft)))
}

#[utoipa::path(
    patch,
    path = "/scaffolding/drafts/{draft_id}",
    tag = "scaffolding",
    params(("draft_id" = String, Path, description = "Draft identifier")),
    request_body = UpdateTableDraftRequestResource,
    responses(
        (status = 200, description = "Draft updated", body = TableDraftResource),
        (status = 400, description = "Invalid request", body = ScaffoldingErrorResponseResource),
        (status = 404, description = "Draft not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn update_table_draft(
    State(state): State<ScaffoldingRestControllerState>,
    Path(draft_id): Path<String>,
    Json(request): Json<UpdateTableDraftRequestResource>,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command = UpdateTableDraftCommand::new(draft_id, request.table_name, request.category)
        .map_err(map_domain_error)?;

    let draft = state
        .draft_command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableDraftResource::from(&draft)))
}

#[utoipa::path(
    delete,
    path = "/scaffolding/drafts/{draft_id}",
    tag = "scaffolding",
    params(("draft_id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 204, description = "Draft deleted"),
        (status = 404, description = "Draft not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn delete_table_draft(
    State(state): State<ScaffoldingRestControllerState>,
    Path(draft_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let command = DeleteTableDraftCommand::new(draft_id).map_err(map_domain_error)?;

    state
        .draft_command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/scaffolding/drafts/{draft_id}/attributes",
    tag = "scaffolding",
    params(("draft_id" = String, Path, description = "Draft identifier")),
    request_body = TableAttributeRequestResource,
    responses(
        (status = 201, description = "Attribute appended", body = TableDraftResource),
        (status = 400, description = "Attribute rejected", body = ScaffoldingErrorResponseResource),
        (status = 404, description = "Draft not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn add_table_attribute(
    State(state): State<ScaffoldingRestControllerState>,
    Path(draft_id): Path<String>,
    Json(request): Json<TableAttributeRequestResource>,
) -> Result<(StatusCode, Json<TableDraftResource>), ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command =
        AddTableAttributeCommand::new(draft_id, request.into()).map_err(map_domain_error)?;

    let draft = state
        .draft_command_service
        .handle_add_attribute(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(TableDraftResource::from(&draft))))
}

#[utoipa::path(
    delete,
    path = "/scaffolding/drafts/{draft_id}/attributes/{attribute_id}",
    tag = "scaffolding",
    params(
        ("draft_id" = String, Path, description = "Draft identifier"),
        ("attribute_id" = String, Path, description = "Attribute identifier")
    ),
    responses(
        (status = 200, description = "Attribute removed", body = TableDraftResource),
        (status = 404, description = "Draft or attribute not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn remove_table_attribute(
    State(state): State<ScaffoldingRestControllerState>,
    Path((draft_id, attribute_id)): Path<(String, String)>,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    let command =
        RemoveTableAttributeCommand::new(draft_id, attribute_id).map_err(map_domain_error)?;

    let draft = state
        .draft_command_service
        .handle_remove_attribute(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableDraftResource::from(&draft)))
}

#[utoipa::path(
    post,
    path = "/scaffolding/drafts/{draft_id}/attributes/{attribute_id}/toggle-primary",
    tag = "scaffolding",
    params(
        ("draft_id" = String, Path, description = "Draft identifier"),
        ("attribute_id" = String, Path, description = "Attribute identifier")
    ),
    responses(
        (status = 200, description = "Primary key flag toggled", body = TableDraftResource),
        (status = 404, description = "Draft or attribute not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn toggle_attribute_primary_key(
    State(state): State<ScaffoldingRestControllerState>,
    Path((draft_id, attribute_id)): Path<(String, String)>,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    toggle_attribute_flag(state, draft_id, attribute_id, AttributeFlag::PrimaryKey).await
}

#[utoipa::path(
    post,
    path = "/scaffolding/drafts/{draft_id}/attributes/{attribute_id}/toggle-identity",
    tag = "scaffolding",
    params(
        ("draft_id" = String, Path, description = "Draft identifier"),
        ("attribute_id" = String, Path, description = "Attribute identifier")
    ),
    responses(
        (status = 200, description = "Identity flag toggled", body = TableDraftResource),
        (status = 400, description = "Identity constraint violated", body = ScaffoldingErrorResponseResource),
        (status = 404, description = "Draft or attribute not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn toggle_attribute_identity(
    State(state): State<ScaffoldingRestControllerState>,
    Path((draft_id, attribute_id)): Path<(String, String)>,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    toggle_attribute_flag(state, draft_id, attribute_id, AttributeFlag::Identity).await
}

#[utoipa::path(
    post,
    path = "/scaffolding/drafts/{draft_id}/generate",
    tag = "scaffolding",
    params(("draft_id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 200, description = "Generated fragments in fixed order", body = [GeneratedUnitResource]),
        (status = 400, description = "Draft violates a table invariant", body = ScaffoldingErrorResponseResource),
        (status = 404, description = "Draft not found", body = ScaffoldingErrorResponseResource),
        (status = 500, description = "Template failure", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn generate_table_draft(
    State(state): State<ScaffoldingRestControllerState>,
    Path(draft_id): Path<String>,
) -> Result<Json<Vec<GeneratedUnitResource>>, ErrorResponse> {
    let command = GenerateTableDraftCommand::new(draft_id).map_err(map_domain_error)?;

    let units = state
        .draft_command_service
        .handle_generate(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_unit_resources(units)))
}

#[utoipa::path(
    get,
    path = "/scaffolding/drafts/{draft_id}/units/{filename}",
    tag = "scaffolding",
    params(
        ("draft_id" = String, Path, description = "Draft identifier"),
        ("filename" = String, Path, description = "Generated file name")
    ),
    responses(
        (status = 200, description = "Generated file as attachment", body = String, content_type = "text/plain"),
        (status = 404, description = "Draft or unit not found", body = ScaffoldingErrorResponseResource)
    )
)]
pub async fn download_generated_unit(
    State(state): State<ScaffoldingRestControllerState>,
    Path((draft_id, filename)): Path<(String, String)>,
) -> Result<Response, ErrorResponse> {
    let query = GetGeneratedUnitQuery::new(draft_id, filename).map_err(map_domain_error)?;

    let unit = state
        .draft_query_service
        .handle_get_generated_unit(query)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", unit.filename),
            ),
        ],
        unit.content,
    )
        .into_response())
}

async fn toggle_attribute_flag(
    state: ScaffoldingRestControllerState,
    draft_id: String,
    attribute_id: String,
    flag: AttributeFlag,
) -> Result<Json<TableDraftResource>, ErrorResponse> {
    let command =
        ToggleAttributeFlagCommand::new(draft_id, attribute_id, flag).map_err(map_domain_error)?;

    let draft = state
        .draft_command_service
        .handle_toggle_flag(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableDraftResource::from(&draft)))
}

fn to_unit_resources(units: Vec<GeneratedUnit>) -> Vec<GeneratedUnitResource> {
    units.into_iter().map(GeneratedUnitResource::from).collect()
}

fn map_validation_error(error: ValidationErrors) -> ErrorResponse {
    warn!(%error, "scaffolding request rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(ScaffoldingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: ScaffoldingDomainError) -> ErrorResponse {
    let status = match error {
        ScaffoldingDomainError::InvalidTableName
        | ScaffoldingDomainError::InvalidAttributeName
        | ScaffoldingDomainError::DuplicateAttributeName(_)
        | ScaffoldingDomainError::DuplicateAttributeNames
        | ScaffoldingDomainError::IdentityRequiresPrimaryKey
        | ScaffoldingDomainError::IdentityRequiresIntegerType
        | ScaffoldingDomainError::MultipleIdentityAttributes
        | ScaffoldingDomainError::MissingAttributes
        | ScaffoldingDomainError::MissingPrimaryKey
        | ScaffoldingDomainError::InvalidCategory(_)
        | ScaffoldingDomainError::InvalidIdentifier => StatusCode::BAD_REQUEST,
        ScaffoldingDomainError::DraftNotFound
        | ScaffoldingDomainError::AttributeNotFound
        | ScaffoldingDomainError::GeneratedUnitNotFound(_) => StatusCode::NOT_FOUND,
        ScaffoldingDomainError::TemplateNotFound(_)
        | ScaffoldingDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        warn!(%error, "scaffolding request failed");
    }

    (
        status,
        Json(ScaffoldingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
