pub mod scaffold_generation_command_service_impl;
pub mod table_draft_command_service_impl;
