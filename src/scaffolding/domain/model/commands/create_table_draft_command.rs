use crate::scaffolding::domain::model::enums::{
    scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
};

#[derive(Clone, Debug)]
pub struct CreateTableDraftCommand {
    table_name: String,
    category: ScaffoldCategory,
}

impl CreateTableDraftCommand {
    pub fn new(
        table_name: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ScaffoldingDomainError> {
        let category = match category {
            Some(raw) => raw.parse::<ScaffoldCategory>()?,
            None => ScaffoldCategory::default(),
        };

        Ok(Self {
            table_name: table_name.unwrap_or_default(),
            category,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn category(&self) -> ScaffoldCategory {
        self.category
    }
}
