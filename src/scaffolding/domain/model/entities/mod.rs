pub mod generated_unit;
pub mod scaffold_catalog;
pub mod table_attribute;
pub mod table_description;
pub mod table_draft;
