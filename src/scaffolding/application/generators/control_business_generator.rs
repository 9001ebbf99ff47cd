use crate::scaffolding::{
    application::generators::{
        table_naming::{class_base, pk_assignments, pk_params_signature, record_type_name},
        template_renderer::{TemplateTokens, render_template},
    },
    domain::model::{
        entities::{generated_unit::GeneratedUnit, table_description::TableDescription},
        enums::generated_unit_kind::GeneratedUnitKind,
    },
};

pub fn generate_control_business_fragment(
    description: &TableDescription,
    template: &str,
) -> GeneratedUnit {
    let raw_table = description.table_name().value();
    let class_base = class_base(raw_table);

    // the variable keeps the raw table name, underscores included
    let tokens = TemplateTokens::new()
        .with("CLASS_BASE", class_base.clone())
        .with("REG_CLASS_NAME", record_type_name(raw_table))
        .with("VAR_NAME", raw_table)
        .with("PK_PARAMS_SIGNATURE", pk_params_signature(description))
        .with("PK_ASSIGNMENTS_VAR", pk_assignments(description, raw_table));

    GeneratedUnit {
        kind: GeneratedUnitKind::ControlBusiness,
        filename: format!("{class_base}_ControlBusiness.txt"),
        content: render_template(template, &tokens),
        title: Some(format!(
            "Business layer fragment \"ControlBusiness\" - {class_base}"
        )),
        placement_hint: Some(format!(
            "Business logic fragment. Paste it into 'ControlBusiness/T{}'.",
            description.category().as_str()
        )),
    }
}
