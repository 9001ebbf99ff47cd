use tier_scaffold_api::scaffolding::domain::model::{
    commands::generate_scaffold_command::{GenerateScaffoldCommand, TableAttributeParts},
    entities::generated_unit::GeneratedUnit,
    enums::generated_unit_kind::GeneratedUnitKind,
};

pub fn attribute(
    name: &str,
    sql_type: &str,
    is_primary: bool,
    is_identity: bool,
) -> TableAttributeParts {
    TableAttributeParts {
        name: name.to_string(),
        sql_type: sql_type.to_string(),
        is_primary,
        is_identity,
        column_name: None,
    }
}

/// `Id` int identity key plus a `Name` varchar.
pub fn customer_attributes() -> Vec<TableAttributeParts> {
    vec![
        attribute("Id", "int", true, true),
        attribute("Name", "varchar(50)", false, false),
    ]
}

/// Composite key `Company` + `Code` (identity) plus a `Description` varchar.
pub fn branch_attributes() -> Vec<TableAttributeParts> {
    vec![
        attribute("Company", "int", true, false),
        attribute("Code", "int", true, true),
        attribute("Description", "varchar(100)", false, false),
    ]
}

pub fn customer_command() -> GenerateScaffoldCommand {
    GenerateScaffoldCommand::new("Customer".to_string(), None, customer_attributes())
        .expect("valid customer command")
}

pub fn branch_command() -> GenerateScaffoldCommand {
    GenerateScaffoldCommand::new(
        "Branch".to_string(),
        Some("Facturacion".to_string()),
        branch_attributes(),
    )
    .expect("valid branch command")
}

pub fn unit_of(units: &[GeneratedUnit], kind: GeneratedUnitKind) -> &GeneratedUnit {
    units
        .iter()
        .find(|unit| unit.kind == kind)
        .expect("unit of requested kind")
}

/// Text from `marker` to the end of `content`.
pub fn section_after<'a>(content: &'a str, marker: &str) -> &'a str {
    let start = content.find(marker).expect("marker present");
    &content[start..]
}
