//! Table-level names shared across fragments.
//!
//! `class_base` (Pascal case) and `manager_class_name` (sanitized, `_`
//! stripped) are derived differently on purpose; fragments reference both.

use crate::scaffolding::{
    application::generators::vb_helpers::{map_sql_type_to_vb_type, sanitize_identifier},
    domain::model::entities::table_description::TableDescription,
};

const RECORD_TYPE_PREFIX: &str = "TReg";
const MANAGER_PREFIX: &str = "T";
const PK_PARAM_PREFIX: &str = "p";
const FALLBACK_CALLER: &str = "Catalogo";

pub fn class_base(table_name: &str) -> String {
    table_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn record_type_name(table_name: &str) -> String {
    format!("{RECORD_TYPE_PREFIX}{}", class_base(table_name))
}

pub fn manager_class_name(table_name: &str) -> String {
    let compact: String = table_name.chars().filter(|c| !c.is_whitespace()).collect();
    sanitize_identifier(&format!("{MANAGER_PREFIX}{compact}")).replace('_', "")
}

/// `, ByVal pId As Integer, ...`; empty when the table has no primary key.
pub fn pk_params_signature(description: &TableDescription) -> String {
    let parts: Vec<String> = description
        .primary_keys()
        .map(|pk| {
            format!(
                "ByVal {PK_PARAM_PREFIX}{} As {}",
                pk.column_name(),
                map_sql_type_to_vb_type(pk.sql_type().value()).as_str()
            )
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(", {}", parts.join(", "))
    }
}

/// `pCompany, pCode` for forwarding calls, without a leading comma.
pub fn pk_args_list(description: &TableDescription) -> String {
    description
        .primary_keys()
        .map(|pk| format!("{PK_PARAM_PREFIX}{}", pk.column_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn pk_assignments(description: &TableDescription, var_name: &str) -> String {
    description
        .primary_keys()
        .map(|pk| {
            format!(
                "            {var_name}.Col.{col} = {PK_PARAM_PREFIX}{col}",
                col = pk.column_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Class the service implementation delegates to, derived from the category tag.
pub fn caller_base(category: &str) -> String {
    let mut rest = category.trim();
    if rest.starts_with(['T', 't']) {
        rest = &rest[1..];
    }
    let extension_at = rest.len().saturating_sub(3);
    if rest
        .get(extension_at..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(".vb"))
    {
        rest = &rest[..extension_at];
    }

    let base: String = rest.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if base.is_empty() {
        FALLBACK_CALLER.to_string()
    } else {
        base
    }
}
