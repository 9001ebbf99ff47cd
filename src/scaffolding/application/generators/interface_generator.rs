use crate::scaffolding::{
    application::generators::{
        table_naming::{caller_base, class_base, pk_params_signature, record_type_name},
        template_renderer::{TemplateTokens, render_template},
        vb_helpers::sanitize_identifier,
    },
    domain::model::{
        entities::{generated_unit::GeneratedUnit, table_description::TableDescription},
        enums::generated_unit_kind::GeneratedUnitKind,
    },
};

pub fn generate_interface_fragment(
    description: &TableDescription,
    template: &str,
) -> GeneratedUnit {
    let raw_table = description.table_name().value();

    let tokens = TemplateTokens::new()
        .with("VAR_NAME", raw_table)
        .with("REG_CLASS_NAME", record_type_name(raw_table))
        .with("PK_PARAMS_SIGNATURE", pk_params_signature(description));

    GeneratedUnit {
        kind: GeneratedUnitKind::ServiceInterface,
        filename: format!("{}_InterfaceIWCF.txt", sanitize_identifier(raw_table)),
        content: render_template(template, &tokens),
        title: Some(format!(
            "Interface IWCF fragment - {}",
            class_base(raw_table)
        )),
        placement_hint: Some(format!(
            "Service contract signatures. Paste them into 'ServiciosWCF/IWCF{}'.",
            caller_base(description.category().as_str())
        )),
    }
}
