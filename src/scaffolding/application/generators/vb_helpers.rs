//! Identifier and type helpers shared by every fragment generator.

use lazy_static::lazy_static;
use regex::Regex;

use crate::scaffolding::domain::model::{enums::vb_type::VbType, value_objects::sql_type::SqlType};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_]").expect("valid regex");
}

/// Turns arbitrary text into a VB identifier. Total and idempotent.
pub fn sanitize_identifier(raw: &str) -> String {
    let underscored = WHITESPACE_RUN.replace_all(raw.trim(), "_");
    let mut out = NON_WORD.replace_all(&underscored, "").into_owned();

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "F_");
    }
    if out.is_empty() {
        out.push('_');
    }

    out
}

pub fn private_field_name(attribute_name: &str) -> String {
    let base = sanitize_identifier(attribute_name);
    if base.starts_with('_') {
        base
    } else {
        format!("_{base}")
    }
}

/// Classification order matters: `bigint` is tested before the substring
/// rules, and `numeric` must not fall through to `String`.
pub fn map_sql_type_to_vb_type(sql_type: &str) -> VbType {
    let bare = SqlType::bare(sql_type);
    let bare = bare.as_str();

    if matches!(bare, "tinyint" | "smallint" | "int" | "integer") {
        return VbType::Integer;
    }
    if bare == "bigint" {
        return VbType::Long;
    }
    if bare.contains("decimal") || bare.contains("numeric") {
        return VbType::Decimal;
    }
    if bare.contains("float") || bare.contains("double") || bare == "real" {
        return VbType::Double;
    }
    if bare.contains("char") || bare.contains("text") {
        return VbType::String;
    }
    if bare.contains("date") || bare.contains("time") {
        return VbType::DateTime;
    }
    if bare == "bit" || bare.contains("bool") {
        return VbType::Boolean;
    }

    VbType::String
}

pub fn default_literal_for_type(vb_type: VbType) -> &'static str {
    vb_type.default_literal()
}
