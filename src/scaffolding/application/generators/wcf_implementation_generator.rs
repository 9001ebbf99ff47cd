use crate::scaffolding::{
    application::generators::{
        table_naming::{
            caller_base, class_base, pk_args_list, pk_params_signature, record_type_name,
        },
        template_renderer::{TemplateTokens, render_template},
        vb_helpers::sanitize_identifier,
    },
    domain::model::{
        entities::{generated_unit::GeneratedUnit, table_description::TableDescription},
        enums::generated_unit_kind::GeneratedUnitKind,
    },
};

pub fn generate_wcf_implementation_fragment(
    description: &TableDescription,
    template: &str,
) -> GeneratedUnit {
    let raw_table = description.table_name().value();
    let class_base = class_base(raw_table);
    let caller = caller_base(description.category().as_str());

    let tokens = TemplateTokens::new()
        .with("VAR_NAME", raw_table)
        .with("CLASS_BASE", class_base.clone())
        .with("REG_CLASS_NAME", record_type_name(raw_table))
        .with("PK_PARAMS_SIGNATURE", pk_params_signature(description))
        .with("PK_ARGS_LIST", pk_args_list(description))
        .with("CALLER_VAR", caller.clone())
        .with("CALLER_CLASS", format!("T{caller}"))
        .with("INTERFACE_NAME", format!("IWCF{caller}"));

    GeneratedUnit {
        kind: GeneratedUnitKind::ServiceImplementation,
        filename: format!("{}_ImplWCF.txt", sanitize_identifier(raw_table)),
        content: render_template(template, &tokens),
        title: Some(format!("WCF Implementation fragment - {class_base}")),
        placement_hint: Some(format!(
            "Fragment that exposes the endpoints in the presentation layer. Paste it into 'ServiciosWCF/WCF{caller}'."
        )),
    }
}
