use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scaffolding::domain::model::entities::{
    table_attribute::TableAttribute, table_draft::TableDraft,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableAttributeResource {
    pub id: String,
    pub name: String,
    pub sql_type: String,
    pub is_primary: bool,
    pub is_identity: bool,
    pub column_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableDraftResource {
    pub id: String,
    pub table_name: String,
    pub category: String,
    pub attributes: Vec<TableAttributeResource>,
    pub generated_filenames: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TableAttribute> for TableAttributeResource {
    fn from(attribute: &TableAttribute) -> Self {
        Self {
            id: attribute.id().value().to_string(),
            name: attribute.name().value().to_string(),
            sql_type: attribute.sql_type().value().to_string(),
            is_primary: attribute.is_primary(),
            is_identity: attribute.is_identity(),
            column_name: attribute.column_name().to_string(),
        }
    }
}

impl From<&TableDraft> for TableDraftResource {
    fn from(draft: &TableDraft) -> Self {
        Self {
            id: draft.id().value().to_string(),
            table_name: draft.table_name().to_string(),
            category: draft.category().as_str().to_string(),
            attributes: draft
                .attributes()
                .iter()
                .map(TableAttributeResource::from)
                .collect(),
            generated_filenames: draft
                .generated_units()
                .iter()
                .map(|unit| unit.filename.clone())
                .collect(),
            created_at: draft.created_at().to_rfc3339(),
            updated_at: draft.updated_at().to_rfc3339(),
        }
    }
}
