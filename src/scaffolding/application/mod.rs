pub mod command_services;
pub mod generators;
pub mod query_services;
