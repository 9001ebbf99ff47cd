use axum::{
    Json,
    body::to_bytes,
    extract::{Path, State},
    http::{StatusCode, header},
};
use tier_scaffold_api::scaffolding::{
    domain::model::enums::generated_unit_kind::GeneratedUnitKind,
    interfaces::rest::{
        controllers::scaffolding_rest_controller::{
            ScaffoldingRestControllerState, add_table_attribute, create_table_draft,
            delete_table_draft, download_generated_unit, generate_scaffold, generate_table_draft,
            get_scaffold_catalog, get_table_draft, toggle_attribute_identity,
        },
        resources::{
            create_table_draft_request_resource::CreateTableDraftRequestResource,
            generate_scaffold_request_resource::GenerateScaffoldRequestResource,
            table_attribute_request_resource::TableAttributeRequestResource,
            table_draft_resource::TableDraftResource,
        },
    },
};
use uuid::Uuid;

use crate::support::create_controller_state;

fn attribute_request(
    name: &str,
    sql_type: &str,
    is_primary: bool,
    is_identity: bool,
) -> TableAttributeRequestResource {
    TableAttributeRequestResource {
        name: name.to_string(),
        sql_type: sql_type.to_string(),
        is_primary,
        is_identity,
        column_name: None,
    }
}

fn customer_request(category: Option<&str>) -> GenerateScaffoldRequestResource {
    GenerateScaffoldRequestResource {
        table_name: "Customer".to_string(),
        category: category.map(str::to_string),
        attributes: vec![
            attribute_request("Id", "int", true, true),
            attribute_request("Name", "varchar(50)", false, false),
        ],
    }
}

async fn create_customer_draft(state: &ScaffoldingRestControllerState) -> TableDraftResource {
    let (status, Json(draft)) = create_table_draft(
        State(state.clone()),
        Json(CreateTableDraftRequestResource {
            table_name: Some("Customer".to_string()),
            category: Some("Compras".to_string()),
        }),
    )
    .await
    .expect("draft created");
    assert_eq!(status, StatusCode::CREATED);

    for request in [
        attribute_request("Id", "int", true, true),
        attribute_request("Name", "varchar(50)", false, false),
    ] {
        add_table_attribute(State(state.clone()), Path(draft.id.clone()), Json(request))
            .await
            .expect("attribute added");
    }

    draft
}

#[tokio::test]
async fn get_scaffold_catalog_lists_categories_and_types() {
    let state = create_controller_state(None);

    let Json(catalog) = get_scaffold_catalog(State(state)).await;

    assert_eq!(catalog.categories.len(), 22);
    assert_eq!(catalog.categories[0], "Catalogo");
    assert!(catalog.categories.iter().any(|c| c == "SAP"));
    assert!(catalog.sql_types.iter().any(|t| t == "varchar"));
}

#[tokio::test]
async fn generate_scaffold_returns_units_in_order() {
    let state = create_controller_state(None);

    let Json(units) = generate_scaffold(State(state), Json(customer_request(Some("Bancos"))))
        .await
        .expect("generation succeeds");

    let kinds: Vec<&str> = units.iter().map(|unit| unit.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "entity",
            "manager",
            "control_business",
            "service_interface",
            "service_implementation",
        ]
    );
    assert!(units[4].content.contains("Dim Bancos As New TBancos"));
}

#[tokio::test]
async fn generate_scaffold_rejects_table_without_primary_key() {
    let state = create_controller_state(None);
    let mut request = customer_request(None);
    request.attributes = vec![attribute_request("Name", "varchar(50)", false, false)];

    let result = generate_scaffold(State(state), Json(request)).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn generate_scaffold_rejects_unknown_category() {
    let state = create_controller_state(None);

    let result = generate_scaffold(State(state), Json(customer_request(Some("Nomina")))).await;

    assert!(matches!(
        result,
        Err((StatusCode::BAD_REQUEST, Json(body))) if body.message.contains("Nomina")
    ));
}

#[tokio::test]
async fn generate_scaffold_rejects_empty_sql_type() {
    let state = create_controller_state(None);
    let mut request = customer_request(None);
    request.attributes[1].sql_type = String::new();

    let result = generate_scaffold(State(state), Json(request)).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn generate_scaffold_maps_missing_template_to_server_error() {
    let state = create_controller_state(Some(GeneratedUnitKind::Manager));

    let result = generate_scaffold(State(state), Json(customer_request(None))).await;

    assert!(matches!(
        result,
        Err((StatusCode::INTERNAL_SERVER_ERROR, _))
    ));
}

#[tokio::test]
async fn get_table_draft_distinguishes_malformed_and_unknown_ids() {
    let state = create_controller_state(None);

    let malformed = get_table_draft(State(state.clone()), Path("not-a-uuid".to_string())).await;
    let unknown = get_table_draft(State(state), Path(Uuid::now_v7().to_string())).await;

    assert!(matches!(malformed, Err((StatusCode::BAD_REQUEST, _))));
    assert!(matches!(unknown, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn toggle_identity_on_text_key_is_bad_request() {
    let state = create_controller_state(None);
    let (_, Json(draft)) = create_table_draft(
        State(state.clone()),
        Json(CreateTableDraftRequestResource::default()),
    )
    .await
    .expect("draft created");
    let (_, Json(draft)) = add_table_attribute(
        State(state.clone()),
        Path(draft.id.clone()),
        Json(attribute_request("Code", "nvarchar(10)", true, false)),
    )
    .await
    .expect("attribute added");

    let result = toggle_attribute_identity(
        State(state),
        Path((draft.id.clone(), draft.attributes[0].id.clone())),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn generated_unit_downloads_as_attachment() {
    let state = create_controller_state(None);
    let draft = create_customer_draft(&state).await;

    let Json(units) = generate_table_draft(State(state.clone()), Path(draft.id.clone()))
        .await
        .expect("generation succeeds");
    let Json(stored) = get_table_draft(State(state.clone()), Path(draft.id.clone()))
        .await
        .expect("draft exists");
    assert_eq!(stored.generated_filenames.len(), 5);

    let response = download_generated_unit(
        State(state),
        Path((draft.id.clone(), "TRegCustomer.vb".to_string())),
    )
    .await
    .expect("unit downloadable");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok()),
        Some("attachment; filename=\"TRegCustomer.vb\"")
    );
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    assert_eq!(body.as_ref(), units[0].content.as_bytes());
}

#[tokio::test]
async fn download_before_generation_is_not_found() {
    let state = create_controller_state(None);
    let draft = create_customer_draft(&state).await;

    let result = download_generated_unit(
        State(state),
        Path((draft.id.clone(), "TRegCustomer.vb".to_string())),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn delete_table_draft_returns_no_content_then_not_found() {
    let state = create_controller_state(None);
    let draft = create_customer_draft(&state).await;

    let first = delete_table_draft(State(state.clone()), Path(draft.id.clone())).await;
    let second = delete_table_draft(State(state), Path(draft.id.clone())).await;

    assert!(matches!(first, Ok(StatusCode::NO_CONTENT)));
    assert!(matches!(second, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn generate_scaffold_accepts_json_without_optional_flags() {
    let state = create_controller_state(None);
    let request: GenerateScaffoldRequestResource = serde_json::from_value(serde_json::json!({
        "table_name": "Country",
        "attributes": [
            { "name": "Code", "sql_type": "char(3)", "is_primary": true },
            { "name": "Name", "sql_type": "varchar(60)" }
        ]
    }))
    .expect("request deserializes");

    let Json(units) = generate_scaffold(State(state), Json(request))
        .await
        .expect("generation succeeds");

    let body = serde_json::to_value(&units[0]).expect("unit serializes");
    assert_eq!(body["kind"], "entity");
    assert_eq!(body["filename"], "TRegCountry.vb");
    assert!(body["title"].is_null());
}
