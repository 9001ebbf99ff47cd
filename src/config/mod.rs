pub mod app_config;
pub mod tracing_config;
