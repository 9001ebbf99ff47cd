pub mod config;
pub mod scaffolding;
