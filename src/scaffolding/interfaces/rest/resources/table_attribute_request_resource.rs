use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::scaffolding::domain::model::commands::generate_scaffold_command::TableAttributeParts;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct TableAttributeRequestResource {
    #[validate(length(max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub sql_type: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_identity: bool,
    pub column_name: Option<String>,
}

impl From<TableAttributeRequestResource> for TableAttributeParts {
    fn from(resource: TableAttributeRequestResource) -> Self {
        Self {
            name: resource.name,
            sql_type: resource.sql_type,
            is_primary: resource.is_primary,
            is_identity: resource.is_identity,
            column_name: resource.column_name,
        }
    }
}
