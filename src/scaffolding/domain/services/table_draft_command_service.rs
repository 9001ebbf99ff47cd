use async_trait::async_trait;

use crate::scaffolding::domain::model::{
    commands::{
        add_table_attribute_command::AddTableAttributeCommand,
        create_table_draft_command::CreateTableDraftCommand,
        delete_table_draft_command::DeleteTableDraftCommand,
        generate_table_draft_command::GenerateTableDraftCommand,
        remove_table_attribute_command::RemoveTableAttributeCommand,
        toggle_attribute_flag_command::ToggleAttributeFlagCommand,
        update_table_draft_command::UpdateTableDraftCommand,
    },
    entities::{generated_unit::GeneratedUnit, table_draft::TableDraft},
    enums::scaffolding_domain_error::ScaffoldingDomainError,
};

#[async_trait]
pub trait TableDraftCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateTableDraftCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_update(
        &self,
        command: UpdateTableDraftCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteTableDraftCommand,
    ) -> Result<(), ScaffoldingDomainError>;

    async fn handle_add_attribute(
        &self,
        command: AddTableAttributeCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_remove_attribute(
        &self,
        command: RemoveTableAttributeCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_toggle_flag(
        &self,
        command: ToggleAttributeFlagCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError>;

    async fn handle_generate(
        &self,
        command: GenerateTableDraftCommand,
    ) -> Result<Vec<GeneratedUnit>, ScaffoldingDomainError>;
}
