pub mod embedded_template_repository_impl;
pub mod file_system_template_repository_impl;
pub mod template_repository;
