use axum::Router;
use dotenvy::dotenv;
use tier_scaffold_api::{
    config::{app_config::AppConfig, tracing_config::init_tracing},
    scaffolding::{
        build_scaffolding_router,
        interfaces::rest::resources::{
            create_table_draft_request_resource::{
                CreateTableDraftRequestResource, UpdateTableDraftRequestResource,
            },
            generate_scaffold_request_resource::GenerateScaffoldRequestResource,
            generated_unit_resource::GeneratedUnitResource,
            scaffold_catalog_resource::ScaffoldCatalogResource,
            scaffolding_error_response_resource::ScaffoldingErrorResponseResource,
            table_attribute_request_resource::TableAttributeRequestResource,
            table_draft_resource::{TableAttributeResource, TableDraftResource},
        },
    },
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::get_scaffold_catalog,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::generate_scaffold,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::create_table_draft,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::get_table_draft,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::update_table_draft,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::delete_table_draft,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::add_table_attribute,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::remove_table_attribute,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::toggle_attribute_primary_key,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::toggle_attribute_identity,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::generate_table_draft,
        tier_scaffold_api::scaffolding::interfaces::rest::controllers::scaffolding_rest_controller::download_generated_unit
    ),
    components(
        schemas(
            GenerateScaffoldRequestResource,
            TableAttributeRequestResource,
            CreateTableDraftRequestResource,
            UpdateTableDraftRequestResource,
            GeneratedUnitResource,
            ScaffoldCatalogResource,
            TableAttributeResource,
            TableDraftResource,
            ScaffoldingErrorResponseResource
        )
    ),
    tags(
        (name = "scaffolding", description = "Three-tier VB.NET scaffolding bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    let scaffolding_router = build_scaffolding_router(&config)
        .await
        .expect("failed to build scaffolding router");

    let app = Router::new()
        .merge(scaffolding_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
