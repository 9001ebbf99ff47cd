use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scaffolding::domain::model::entities::generated_unit::GeneratedUnit;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GeneratedUnitResource {
    pub kind: String,
    pub filename: String,
    pub content: String,
    pub title: Option<String>,
    pub placement_hint: Option<String>,
}

impl From<GeneratedUnit> for GeneratedUnitResource {
    fn from(unit: GeneratedUnit) -> Self {
        Self {
            kind: unit.kind.as_str().to_string(),
            filename: unit.filename,
            content: unit.content,
            title: unit.title,
            placement_hint: unit.placement_hint,
        }
    }
}
