use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scaffolding::domain::model::entities::scaffold_catalog::ScaffoldCatalog;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ScaffoldCatalogResource {
    pub categories: Vec<String>,
    pub sql_types: Vec<String>,
}

impl From<ScaffoldCatalog> for ScaffoldCatalogResource {
    fn from(catalog: ScaffoldCatalog) -> Self {
        Self {
            categories: catalog
                .categories
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
            sql_types: catalog.sql_types.iter().map(|t| t.to_string()).collect(),
        }
    }
}
