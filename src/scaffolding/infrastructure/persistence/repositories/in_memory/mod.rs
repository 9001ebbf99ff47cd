pub mod in_memory_table_draft_repository_impl;
