use async_trait::async_trait;

use crate::scaffolding::domain::{
    model::entities::scaffold_catalog::ScaffoldCatalog,
    services::scaffold_catalog_query_service::ScaffoldCatalogQueryService,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct ScaffoldCatalogQueryServiceImpl;

impl ScaffoldCatalogQueryServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScaffoldCatalogQueryService for ScaffoldCatalogQueryServiceImpl {
    async fn handle_get_catalog(&self) -> ScaffoldCatalog {
        ScaffoldCatalog::standard()
    }
}
