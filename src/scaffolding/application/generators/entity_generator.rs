use crate::scaffolding::{
    application::generators::{
        table_naming::record_type_name,
        template_renderer::{TemplateTokens, render_template},
        vb_helpers::{
            default_literal_for_type, map_sql_type_to_vb_type, private_field_name,
            sanitize_identifier,
        },
    },
    domain::model::{
        entities::{generated_unit::GeneratedUnit, table_description::TableDescription},
        enums::generated_unit_kind::GeneratedUnitKind,
    },
};

pub fn generate_entity_file(description: &TableDescription, template: &str) -> GeneratedUnit {
    let class_name = record_type_name(description.table_name().value());
    let attributes = description.attributes();

    let variables = if attributes.is_empty() {
        "    ' No attributes defined".to_string()
    } else {
        attributes
            .iter()
            .map(|a| {
                format!(
                    "    Private {} As {}",
                    private_field_name(a.name().value()),
                    map_sql_type_to_vb_type(a.sql_type().value()).as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let properties = if attributes.is_empty() {
        "    ' No properties defined".to_string()
    } else {
        attributes
            .iter()
            .map(|a| {
                let property = sanitize_identifier(a.name().value());
                let field = private_field_name(a.name().value());
                let vb_type = map_sql_type_to_vb_type(a.sql_type().value()).as_str();
                [
                    format!("    Public Property {property}() As {vb_type}"),
                    "        Get".to_string(),
                    format!("            Return {field}"),
                    "        End Get".to_string(),
                    format!("        Set(ByVal Value As {vb_type})"),
                    format!("            {field} = Value"),
                    "        End Set".to_string(),
                    "    End Property".to_string(),
                    String::new(),
                ]
                .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let initializations = if attributes.is_empty() {
        "        ' Nothing to initialize".to_string()
    } else {
        attributes
            .iter()
            .map(|a| {
                let vb_type = map_sql_type_to_vb_type(a.sql_type().value());
                format!(
                    "        {} = {}",
                    private_field_name(a.name().value()),
                    default_literal_for_type(vb_type)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let tokens = TemplateTokens::new()
        .with("TableName", class_name.clone())
        .with("VARIABLES", variables)
        .with("PROPERTIES", properties)
        .with("INITIALIZATIONS", initializations);

    GeneratedUnit {
        kind: GeneratedUnitKind::Entity,
        filename: format!("{class_name}.vb"),
        content: render_template(template, &tokens),
        title: None,
        placement_hint: Some(format!(
            "Entity that represents the SQL table in the backend. Place the file in 'AccesoTablas/{}'.",
            description.category().as_str()
        )),
    }
}
