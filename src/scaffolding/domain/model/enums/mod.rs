pub mod generated_unit_kind;
pub mod scaffold_category;
pub mod scaffolding_domain_error;
pub mod vb_type;
