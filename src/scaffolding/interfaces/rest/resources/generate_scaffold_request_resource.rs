use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::table_attribute_request_resource::TableAttributeRequestResource;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct GenerateScaffoldRequestResource {
    #[validate(length(max = 128))]
    pub table_name: String,
    pub category: Option<String>,
    #[validate(nested)]
    pub attributes: Vec<TableAttributeRequestResource>,
}
