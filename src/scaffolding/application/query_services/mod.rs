pub mod scaffold_catalog_query_service_impl;
pub mod table_draft_query_service_impl;
