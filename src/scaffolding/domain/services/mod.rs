pub mod scaffold_catalog_query_service;
pub mod scaffold_generation_command_service;
pub mod table_draft_command_service;
pub mod table_draft_query_service;
