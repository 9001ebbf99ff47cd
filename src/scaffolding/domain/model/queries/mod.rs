pub mod get_generated_unit_query;
pub mod get_table_draft_query;
