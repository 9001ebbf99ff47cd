use tier_scaffold_api::scaffolding::{
    application::generators::{
        table_naming::{caller_base, class_base, manager_class_name, record_type_name},
        vb_helpers::{
            default_literal_for_type, map_sql_type_to_vb_type, private_field_name,
            sanitize_identifier,
        },
    },
    domain::model::{enums::vb_type::VbType, value_objects::sql_type::SqlType},
};

#[test]
fn sanitize_identifier_handles_spaces_symbols_and_digits() {
    assert_eq!(sanitize_identifier("  Order Detail "), "Order_Detail");
    assert_eq!(sanitize_identifier("Price ($)"), "Price_");
    assert_eq!(sanitize_identifier("1st-column"), "F_1stcolumn");
    assert_eq!(sanitize_identifier("Año"), "Ao");
}

#[test]
fn sanitize_identifier_never_returns_empty() {
    assert_eq!(sanitize_identifier(""), "_");
    assert_eq!(sanitize_identifier("   "), "_");
    assert_eq!(sanitize_identifier("$%&"), "_");
}

#[test]
fn sanitize_identifier_is_idempotent() {
    for raw in ["Order Detail", "1st-column", "", "   ", "__x__", "Price ($)", "9"] {
        let once = sanitize_identifier(raw);
        assert_eq!(sanitize_identifier(&once), once, "input {raw:?}");
    }
}

#[test]
fn private_field_name_prefixes_underscore_once() {
    assert_eq!(private_field_name("Name"), "_Name");
    assert_eq!(private_field_name("_Name"), "_Name");
    assert_eq!(private_field_name("Unit Price"), "_Unit_Price");
}

#[test]
fn sql_types_map_to_vb_types() {
    let cases = [
        ("int", VbType::Integer),
        ("TINYINT", VbType::Integer),
        ("bigint", VbType::Long),
        ("decimal(10,2)", VbType::Decimal),
        ("numeric(18, 4)", VbType::Decimal),
        ("float", VbType::Double),
        ("real", VbType::Double),
        ("nvarchar(max)", VbType::String),
        ("text", VbType::String),
        ("datetime", VbType::DateTime),
        ("date", VbType::DateTime),
        ("bit", VbType::Boolean),
        ("boolean", VbType::Boolean),
        ("uniqueidentifier", VbType::String),
    ];

    for (sql_type, expected) in cases {
        assert_eq!(map_sql_type_to_vb_type(sql_type), expected, "type {sql_type}");
    }
}

#[test]
fn precision_suffix_does_not_change_mapping() {
    assert_eq!(
        map_sql_type_to_vb_type("decimal(10,2)"),
        map_sql_type_to_vb_type("decimal")
    );
    assert_eq!(
        map_sql_type_to_vb_type("varchar(50)"),
        map_sql_type_to_vb_type("varchar")
    );
}

#[test]
fn default_literals_follow_vb_type() {
    assert_eq!(default_literal_for_type(VbType::Integer), "0");
    assert_eq!(default_literal_for_type(VbType::Long), "0");
    assert_eq!(default_literal_for_type(VbType::Decimal), "0D");
    assert_eq!(default_literal_for_type(VbType::Boolean), "False");
    assert_eq!(default_literal_for_type(VbType::String), "\"\"");
    assert_eq!(
        default_literal_for_type(VbType::DateTime),
        "CDate(\"1900/01/01\")"
    );
}

#[test]
fn identity_capable_types_ignore_case_and_precision() {
    assert!(SqlType::new("INT".to_string()).is_identity_capable());
    assert!(SqlType::new("bigint".to_string()).is_identity_capable());
    assert!(SqlType::new("smallint".to_string()).is_identity_capable());
    assert!(!SqlType::new("tinyint".to_string()).is_identity_capable());
    assert!(!SqlType::new("decimal(10,0)".to_string()).is_identity_capable());
}

#[test]
fn table_names_derive_class_names() {
    assert_eq!(class_base("order_detail"), "OrderDetail");
    assert_eq!(class_base("Customer"), "Customer");
    assert_eq!(record_type_name("order_detail"), "TRegOrderDetail");
    assert_eq!(manager_class_name("Order_Detail"), "TOrderDetail");
    assert_eq!(manager_class_name("order detail"), "Torderdetail");
}

#[test]
fn caller_base_strips_prefix_and_extension() {
    assert_eq!(caller_base("TFacturacion.vb"), "Facturacion");
    assert_eq!(caller_base("Catalogo"), "Catalogo");
    assert_eq!(caller_base("SAP"), "SAP");
    assert_eq!(caller_base(""), "Catalogo");
    assert_eq!(caller_base("T"), "Catalogo");
}
