pub mod persistence;
pub mod templates;
