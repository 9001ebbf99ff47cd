use tier_scaffold_api::scaffolding::domain::{
    model::{
        commands::{
            add_table_attribute_command::AddTableAttributeCommand,
            create_table_draft_command::CreateTableDraftCommand,
            delete_table_draft_command::DeleteTableDraftCommand,
            generate_scaffold_command::TableAttributeParts,
            generate_table_draft_command::GenerateTableDraftCommand,
            remove_table_attribute_command::RemoveTableAttributeCommand,
            toggle_attribute_flag_command::{AttributeFlag, ToggleAttributeFlagCommand},
            update_table_draft_command::UpdateTableDraftCommand,
        },
        entities::table_draft::TableDraft,
        enums::{
            scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
        },
        queries::{
            get_generated_unit_query::GetGeneratedUnitQuery,
            get_table_draft_query::GetTableDraftQuery,
        },
    },
    services::{
        table_draft_command_service::TableDraftCommandService,
        table_draft_query_service::TableDraftQueryService,
    },
};
use uuid::Uuid;

use crate::support::{attribute, create_harness, harness::ScaffoldingTestHarness};

async fn create_draft(harness: &ScaffoldingTestHarness, table_name: &str) -> TableDraft {
    harness
        .draft_service
        .handle_create(
            CreateTableDraftCommand::new(Some(table_name.to_string()), None)
                .expect("valid create command"),
        )
        .await
        .expect("draft should be created")
}

async fn add(
    harness: &ScaffoldingTestHarness,
    draft: &TableDraft,
    name: &str,
    sql_type: &str,
    is_primary: bool,
    is_identity: bool,
) -> Result<TableDraft, ScaffoldingDomainError> {
    let command = AddTableAttributeCommand::new(
        draft.id().value().to_string(),
        attribute(name, sql_type, is_primary, is_identity),
    )
    .expect("valid add command");
    harness.draft_service.handle_add_attribute(command).await
}

fn toggle(draft: &TableDraft, position: usize, flag: AttributeFlag) -> ToggleAttributeFlagCommand {
    ToggleAttributeFlagCommand::new(
        draft.id().value().to_string(),
        draft.attributes()[position].id().value().to_string(),
        flag,
    )
    .expect("valid toggle command")
}

fn identity_flags(draft: &TableDraft) -> Vec<bool> {
    draft.attributes().iter().map(|a| a.is_identity()).collect()
}

#[tokio::test]
async fn handle_create_trims_name_and_defaults_category() {
    let harness = create_harness(None);

    let draft = create_draft(&harness, "  Customer  ").await;

    assert_eq!(draft.table_name(), "Customer");
    assert_eq!(draft.category(), ScaffoldCategory::Catalogo);
    assert!(draft.attributes().is_empty());
    assert_eq!(harness.draft_repository.save_count(), 1);
}

#[test]
fn create_command_rejects_unknown_category() {
    let result = CreateTableDraftCommand::new(None, Some("catalogo".to_string()));

    assert!(matches!(
        result,
        Err(ScaffoldingDomainError::InvalidCategory(name)) if name == "catalogo"
    ));
}

#[tokio::test]
async fn handle_add_attribute_rejects_name_differing_only_in_case() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    add(&harness, &draft, "Foo", "int", true, false)
        .await
        .expect("first attribute accepted");
    let saves = harness.draft_repository.save_count();

    let result = add(&harness, &draft, "foo", "varchar(10)", false, false).await;

    assert!(matches!(
        result,
        Err(ScaffoldingDomainError::DuplicateAttributeName(name)) if name == "foo"
    ));
    assert_eq!(harness.draft_repository.save_count(), saves);
    let stored = harness
        .query_service
        .handle_get(GetTableDraftQuery::new(draft.id().value().to_string()).expect("valid id"))
        .await
        .expect("draft exists");
    assert_eq!(stored.attributes().len(), 1);
}

#[tokio::test]
async fn handle_add_attribute_normalizes_column_override() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Price").await;
    let command = AddTableAttributeCommand::new(
        draft.id().value().to_string(),
        TableAttributeParts {
            column_name: Some(" Unit   Id ".to_string()),
            ..attribute("UnitId", "int", true, false)
        },
    )
    .expect("valid add command");

    let updated = harness
        .draft_service
        .handle_add_attribute(command)
        .await
        .expect("attribute accepted");

    assert_eq!(updated.attributes()[0].name().value(), "UnitId");
    assert_eq!(updated.attributes()[0].column_name(), "Unit_Id");
}

#[tokio::test]
async fn blank_column_override_falls_back_to_attribute_name() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Price").await;
    let command = AddTableAttributeCommand::new(
        draft.id().value().to_string(),
        TableAttributeParts {
            column_name: Some("   ".to_string()),
            ..attribute("Unit Id", "int", true, false)
        },
    )
    .expect("valid add command");

    let updated = harness
        .draft_service
        .handle_add_attribute(command)
        .await
        .expect("attribute accepted");

    assert_eq!(updated.attributes()[0].column_name(), "Unit_Id");
}

#[tokio::test]
async fn handle_add_attribute_rejects_identity_without_primary_key() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;

    let result = add(&harness, &draft, "Id", "int", false, true).await;

    assert!(matches!(
        result,
        Err(ScaffoldingDomainError::IdentityRequiresPrimaryKey)
    ));
}

#[tokio::test]
async fn handle_add_attribute_rejects_identity_on_text_column() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;

    let result = add(&harness, &draft, "Code", "varchar(10)", true, true).await;

    assert!(matches!(
        result,
        Err(ScaffoldingDomainError::IdentityRequiresIntegerType)
    ));
}

#[tokio::test]
async fn second_identity_attribute_clears_the_first() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Branch").await;
    add(&harness, &draft, "Company", "int", true, true)
        .await
        .expect("first identity accepted");

    let updated = add(&harness, &draft, "Code", "bigint", true, true)
        .await
        .expect("second identity accepted");

    assert_eq!(identity_flags(&updated), vec![false, true]);
}

#[tokio::test]
async fn toggle_identity_moves_identity_between_keys() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Branch").await;
    add(&harness, &draft, "Company", "int", true, false)
        .await
        .expect("company accepted");
    let draft = add(&harness, &draft, "Code", "smallint", true, true)
        .await
        .expect("code accepted");

    let updated = harness
        .draft_service
        .handle_toggle_flag(toggle(&draft, 0, AttributeFlag::Identity))
        .await
        .expect("toggle accepted");

    assert_eq!(identity_flags(&updated), vec![true, false]);
}

#[tokio::test]
async fn toggle_identity_on_non_key_is_rejected_and_not_saved() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    let draft = add(&harness, &draft, "Age", "int", false, false)
        .await
        .expect("age accepted");
    let saves = harness.draft_repository.save_count();

    let result = harness
        .draft_service
        .handle_toggle_flag(toggle(&draft, 0, AttributeFlag::Identity))
        .await;

    assert!(matches!(
        result,
        Err(ScaffoldingDomainError::IdentityRequiresPrimaryKey)
    ));
    assert_eq!(harness.draft_repository.save_count(), saves);
}

#[tokio::test]
async fn clearing_primary_key_also_clears_identity() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    let draft = add(&harness, &draft, "Id", "int", true, true)
        .await
        .expect("id accepted");

    let updated = harness
        .draft_service
        .handle_toggle_flag(toggle(&draft, 0, AttributeFlag::PrimaryKey))
        .await
        .expect("toggle accepted");

    assert!(!updated.attributes()[0].is_primary());
    assert!(!updated.attributes()[0].is_identity());
}

#[tokio::test]
async fn handle_remove_attribute_reports_unknown_attribute() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;

    let result = harness
        .draft_service
        .handle_remove_attribute(
            RemoveTableAttributeCommand::new(
                draft.id().value().to_string(),
                Uuid::now_v7().to_string(),
            )
            .expect("valid command"),
        )
        .await;

    assert!(matches!(result, Err(ScaffoldingDomainError::AttributeNotFound)));
}

#[tokio::test]
async fn handle_update_renames_and_recategorizes() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;

    let updated = harness
        .draft_service
        .handle_update(
            UpdateTableDraftCommand::new(
                draft.id().value().to_string(),
                Some("Supplier".to_string()),
                Some("SAP".to_string()),
            )
            .expect("valid update command"),
        )
        .await
        .expect("update accepted");

    assert_eq!(updated.table_name(), "Supplier");
    assert_eq!(updated.category(), ScaffoldCategory::Sap);
}

#[tokio::test]
async fn handle_generate_rejects_draft_without_primary_key() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    add(&harness, &draft, "Name", "varchar(50)", false, false)
        .await
        .expect("name accepted");

    let result = harness
        .draft_service
        .handle_generate(
            GenerateTableDraftCommand::new(draft.id().value().to_string()).expect("valid id"),
        )
        .await;

    assert!(matches!(result, Err(ScaffoldingDomainError::MissingPrimaryKey)));
    assert!(harness.template_repository.loaded_kinds().is_empty());
}

#[tokio::test]
async fn handle_generate_stores_units_for_download() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    add(&harness, &draft, "Id", "int", true, true)
        .await
        .expect("id accepted");
    add(&harness, &draft, "Name", "varchar(50)", false, false)
        .await
        .expect("name accepted");

    let units = harness
        .draft_service
        .handle_generate(
            GenerateTableDraftCommand::new(draft.id().value().to_string()).expect("valid id"),
        )
        .await
        .expect("generation succeeds");

    assert_eq!(units.len(), 5);
    let manager = harness
        .query_service
        .handle_get_generated_unit(
            GetGeneratedUnitQuery::new(draft.id().value().to_string(), "TCustomer.vb".to_string())
                .expect("valid query"),
        )
        .await
        .expect("manager stored");
    assert_eq!(manager, units[1]);
}

#[tokio::test]
async fn handle_delete_removes_draft_once() {
    let harness = create_harness(None);
    let draft = create_draft(&harness, "Customer").await;
    let id = draft.id().value().to_string();

    harness
        .draft_service
        .handle_delete(DeleteTableDraftCommand::new(id.clone()).expect("valid id"))
        .await
        .expect("first delete succeeds");
    let second = harness
        .draft_service
        .handle_delete(DeleteTableDraftCommand::new(id).expect("valid id"))
        .await;

    assert!(matches!(second, Err(ScaffoldingDomainError::DraftNotFound)));
}
