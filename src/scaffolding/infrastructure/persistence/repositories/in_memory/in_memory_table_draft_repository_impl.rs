use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::scaffolding::{
    domain::model::{
        entities::table_draft::TableDraft,
        enums::scaffolding_domain_error::ScaffoldingDomainError,
        value_objects::table_draft_id::TableDraftId,
    },
    infrastructure::persistence::repositories::table_draft_repository::TableDraftRepository,
};

/// Session-scoped draft store; contents are lost when the process exits.
/// Drafts untouched for longer than `idle_ttl` are dropped on the next save.
pub struct InMemoryTableDraftRepositoryImpl {
    drafts: RwLock<HashMap<TableDraftId, TableDraft>>,
    idle_ttl: Duration,
}

impl InMemoryTableDraftRepositoryImpl {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            drafts: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    fn is_expired(&self, draft: &TableDraft) -> bool {
        draft.updated_at() < Utc::now() - self.idle_ttl
    }
}

#[async_trait]
impl TableDraftRepository for InMemoryTableDraftRepositoryImpl {
    async fn save(&self, draft: &TableDraft) -> Result<(), ScaffoldingDomainError> {
        let mut drafts = self.drafts.write().await;

        let before = drafts.len();
        drafts.retain(|_, stored| !self.is_expired(stored));
        let swept = before - drafts.len();
        if swept > 0 {
            debug!(swept, "dropped idle table drafts");
        }

        drafts.insert(draft.id(), draft.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        draft_id: TableDraftId,
    ) -> Result<Option<TableDraft>, ScaffoldingDomainError> {
        Ok(self
            .drafts
            .read()
            .await
            .get(&draft_id)
            .filter(|draft| !self.is_expired(draft))
            .cloned())
    }

    async fn delete(&self, draft_id: TableDraftId) -> Result<bool, ScaffoldingDomainError> {
        Ok(self.drafts.write().await.remove(&draft_id).is_some())
    }
}
