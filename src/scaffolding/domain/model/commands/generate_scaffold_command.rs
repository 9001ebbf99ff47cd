use crate::scaffolding::domain::model::{
    entities::{table_attribute::TableAttribute, table_description::TableDescription},
    enums::{
        scaffold_category::ScaffoldCategory, scaffolding_domain_error::ScaffoldingDomainError,
    },
    value_objects::table_name::TableName,
};

#[derive(Clone, Debug)]
pub struct TableAttributeParts {
    pub name: String,
    pub sql_type: String,
    pub is_primary: bool,
    pub is_identity: bool,
    pub column_name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GenerateScaffoldCommand {
    description: TableDescription,
}

impl GenerateScaffoldCommand {
    pub fn new(
        table_name: String,
        category: Option<String>,
        attributes: Vec<TableAttributeParts>,
    ) -> Result<Self, ScaffoldingDomainError> {
        let table_name = TableName::new(table_name)?;
        let category = match category {
            Some(raw) => raw.parse::<ScaffoldCategory>()?,
            None => ScaffoldCategory::default(),
        };
        let attributes = attributes
            .into_iter()
            .map(|parts| {
                TableAttribute::new(
                    parts.name,
                    parts.sql_type,
                    parts.is_primary,
                    parts.is_identity,
                    parts.column_name,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            description: TableDescription::new(table_name, category, attributes)?,
        })
    }

    pub fn from_description(description: TableDescription) -> Self {
        Self { description }
    }

    pub fn description(&self) -> &TableDescription {
        &self.description
    }
}
