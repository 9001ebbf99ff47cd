pub mod create_table_draft_request_resource;
pub mod generate_scaffold_request_resource;
pub mod generated_unit_resource;
pub mod scaffold_catalog_resource;
pub mod scaffolding_error_response_resource;
pub mod table_attribute_request_resource;
pub mod table_draft_resource;
