use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTableDraftRequestResource {
    #[validate(length(max = 128))]
    pub table_name: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateTableDraftRequestResource {
    #[validate(length(max = 128))]
    pub table_name: Option<String>,
    pub category: Option<String>,
}
