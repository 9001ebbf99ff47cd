use async_trait::async_trait;

use crate::scaffolding::domain::model::entities::scaffold_catalog::ScaffoldCatalog;

#[async_trait]
pub trait ScaffoldCatalogQueryService: Send + Sync {
    async fn handle_get_catalog(&self) -> ScaffoldCatalog;
}
