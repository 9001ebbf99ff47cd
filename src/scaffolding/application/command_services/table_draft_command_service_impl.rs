use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

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
            entities::{generated_unit::GeneratedUnit, table_draft::TableDraft},
            enums::scaffolding_domain_error::ScaffoldingDomainError,
            value_objects::table_draft_id::TableDraftId,
        },
        services::{
            scaffold_generation_command_service::ScaffoldGenerationCommandService,
            table_draft_command_service::TableDraftCommandService,
        },
    },
    infrastructure::persistence::repositories::table_draft_repository::TableDraftRepository,
};

pub struct TableDraftCommandServiceImpl {
    draft_repository: Arc<dyn TableDraftRepository>,
    generation_service: Arc<dyn ScaffoldGenerationCommandService>,
    // serializes load-change-save sequences
    write_gate: Mutex<()>,
}

impl TableDraftCommandServiceImpl {
    pub fn new(
        draft_repository: Arc<dyn TableDraftRepository>,
        generation_service: Arc<dyn ScaffoldGenerationCommandService>,
    ) -> Self {
        Self {
            draft_repository,
            generation_service,
            write_gate: Mutex::new(()),
        }
    }

    async fn load(&self, draft_id: TableDraftId) -> Result<TableDraft, ScaffoldingDomainError> {
        self.draft_repository
            .find_by_id(draft_id)
            .await?
            .ok_or(ScaffoldingDomainError::DraftNotFound)
    }

    /// Applies `change` to a copy of the draft and stores it only on success.
    async fn mutate<F>(
        &self,
        draft_id: TableDraftId,
        change: F,
    ) -> Result<TableDraft, ScaffoldingDomainError>
    where
        F: FnOnce(&mut TableDraft) -> Result<(), ScaffoldingDomainError> + Send,
    {
        let _guard = self.write_gate.lock().await;
        let mut draft = self.load(draft_id).await?;

        if let Err(error) = change(&mut draft) {
            warn!(draft_id = %draft_id.value(), %error, "draft change rejected");
            return Err(error);
        }

        self.draft_repository.save(&draft).await?;
        Ok(draft)
    }
}

#[async_trait]
impl TableDraftCommandService for TableDraftCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateTableDraftCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        let draft = TableDraft::new(
            command.table_name().to_string(),
            command.category(),
            Utc::now(),
        );
        self.draft_repository.save(&draft).await?;
        info!(draft_id = %draft.id().value(), "table draft created");
        Ok(draft)
    }

    async fn handle_update(
        &self,
        command: UpdateTableDraftCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        self.mutate(command.draft_id(), |draft| {
            if let Some(table_name) = command.table_name() {
                draft.rename(table_name.to_string());
            }
            if let Some(category) = command.category() {
                draft.change_category(category);
            }
            Ok(())
        })
        .await
    }

    async fn handle_delete(
        &self,
        command: DeleteTableDraftCommand,
    ) -> Result<(), ScaffoldingDomainError> {
        if !self.draft_repository.delete(command.draft_id()).await? {
            return Err(ScaffoldingDomainError::DraftNotFound);
        }
        info!(draft_id = %command.draft_id().value(), "table draft deleted");
        Ok(())
    }

    async fn handle_add_attribute(
        &self,
        command: AddTableAttributeCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        let attribute = command.attribute().clone();
        self.mutate(command.draft_id(), move |draft| {
            draft.add_attribute(attribute).map(|_| ())
        })
        .await
    }

    async fn handle_remove_attribute(
        &self,
        command: RemoveTableAttributeCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        let attribute_id = command.attribute_id();
        self.mutate(command.draft_id(), move |draft| {
            draft.remove_attribute(attribute_id)
        })
        .await
    }

    async fn handle_toggle_flag(
        &self,
        command: ToggleAttributeFlagCommand,
    ) -> Result<TableDraft, ScaffoldingDomainError> {
        let attribute_id = command.attribute_id();
        let flag = command.flag();
        self.mutate(command.draft_id(), move |draft| match flag {
            AttributeFlag::PrimaryKey => draft.toggle_primary(attribute_id),
            AttributeFlag::Identity => draft.toggle_identity(attribute_id),
        })
        .await
    }

    async fn handle_generate(
        &self,
        command: GenerateTableDraftCommand,
    ) -> Result<Vec<GeneratedUnit>, ScaffoldingDomainError> {
        let _guard = self.write_gate.lock().await;
        let mut draft = self.load(command.draft_id()).await?;

        let description = draft.describe().inspect_err(|error| {
            warn!(draft_id = %command.draft_id().value(), %error, "draft is not ready for generation");
        })?;

        let units = self
            .generation_service
            .handle_generate(GenerateScaffoldCommand::from_description(description))
            .await?;

        draft.record_generation(units.clone());
        self.draft_repository.save(&draft).await?;

        Ok(units)
    }
}
