use crate::scaffolding::domain::model::enums::scaffold_category::ScaffoldCategory;

pub const COMMON_SQL_TYPES: [&str; 12] = [
    "int", "bigint", "smallint", "decimal", "numeric", "float", "varchar", "nvarchar", "text",
    "datetime", "date", "bit",
];

/// Choices offered by the form when describing a table.
#[derive(Clone, Debug)]
pub struct ScaffoldCatalog {
    pub categories: Vec<ScaffoldCategory>,
    pub sql_types: Vec<&'static str>,
}

impl ScaffoldCatalog {
    pub fn standard() -> Self {
        Self {
            categories: ScaffoldCategory::ALL.to_vec(),
            sql_types: COMMON_SQL_TYPES.to_vec(),
        }
    }
}
