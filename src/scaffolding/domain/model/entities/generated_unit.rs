use crate::scaffolding::domain::model::enums::generated_unit_kind::GeneratedUnitKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub kind: GeneratedUnitKind,
    pub filename: String,
    pub content: String,
    pub title: Option<String>,
    pub placement_hint: Option<String>,
}
