use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use crate::scaffolding::{
    domain::model::enums::{
        generated_unit_kind::GeneratedUnitKind, scaffolding_domain_error::ScaffoldingDomainError,
    },
    infrastructure::templates::template_repository::TemplateRepository,
};

/// Reads `<directory>/<template file>` on every load, so edits apply without a restart.
pub struct FileSystemTemplateRepositoryImpl {
    directory: PathBuf,
}

impl FileSystemTemplateRepositoryImpl {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl TemplateRepository for FileSystemTemplateRepositoryImpl {
    async fn load(&self, kind: GeneratedUnitKind) -> Result<String, ScaffoldingDomainError> {
        let path = self.directory.join(kind.template_file_name());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|error| match error.kind() {
                ErrorKind::NotFound => {
                    ScaffoldingDomainError::TemplateNotFound(path.display().to_string())
                }
                _ => ScaffoldingDomainError::InfrastructureError(error.to_string()),
            })
    }
}
