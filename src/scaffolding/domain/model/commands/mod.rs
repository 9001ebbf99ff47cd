pub mod add_table_attribute_command;
pub mod create_table_draft_command;
pub mod delete_table_draft_command;
pub mod generate_scaffold_command;
pub mod generate_table_draft_command;
pub mod remove_table_attribute_command;
pub mod toggle_attribute_flag_command;
pub mod update_table_draft_command;
