pub mod in_memory;
pub mod table_draft_repository;
