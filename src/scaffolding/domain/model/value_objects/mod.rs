pub mod attribute_id;
pub mod attribute_name;
pub mod sql_type;
pub mod table_draft_id;
pub mod table_name;
