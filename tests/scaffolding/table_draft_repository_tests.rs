use chrono::{Duration, Utc};
use tier_scaffold_api::scaffolding::{
    domain::model::{entities::table_draft::TableDraft, enums::scaffold_category::ScaffoldCategory},
    infrastructure::persistence::repositories::{
        in_memory::in_memory_table_draft_repository_impl::InMemoryTableDraftRepositoryImpl,
        table_draft_repository::TableDraftRepository,
    },
};

fn draft_touched_ago(table_name: &str, age: Duration) -> TableDraft {
    TableDraft::new(
        table_name.to_string(),
        ScaffoldCategory::Catalogo,
        Utc::now() - age,
    )
}

#[tokio::test]
async fn idle_drafts_are_dropped_on_next_save() {
    let repository = InMemoryTableDraftRepositoryImpl::new(Duration::hours(1));
    let stale = draft_touched_ago("Customer", Duration::hours(2));
    let fresh = draft_touched_ago("Supplier", Duration::minutes(5));

    repository.save(&stale).await.expect("stale draft saved");
    repository.save(&fresh).await.expect("fresh draft saved");

    assert!(
        repository
            .find_by_id(stale.id())
            .await
            .expect("lookup succeeds")
            .is_none()
    );
    assert!(!repository.delete(stale.id()).await.expect("delete succeeds"));
    assert!(
        repository
            .find_by_id(fresh.id())
            .await
            .expect("lookup succeeds")
            .is_some()
    );
}

#[tokio::test]
async fn idle_draft_is_not_found_before_any_sweep() {
    let repository = InMemoryTableDraftRepositoryImpl::new(Duration::hours(1));
    let stale = draft_touched_ago("Customer", Duration::hours(2));
    repository.save(&stale).await.expect("stale draft saved");

    let found = repository.find_by_id(stale.id()).await.expect("lookup succeeds");

    assert!(found.is_none());
}

#[tokio::test]
async fn active_draft_survives_repeated_saves() {
    let repository = InMemoryTableDraftRepositoryImpl::new(Duration::hours(1));
    let draft = draft_touched_ago("Customer", Duration::minutes(59));

    repository.save(&draft).await.expect("first save");
    repository.save(&draft).await.expect("second save");

    let found = repository.find_by_id(draft.id()).await.expect("lookup succeeds");
    assert_eq!(found.map(|stored| stored.table_name().to_string()), Some("Customer".to_string()));
}
