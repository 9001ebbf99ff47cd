use async_trait::async_trait;

use crate::scaffolding::domain::model::enums::{
    generated_unit_kind::GeneratedUnitKind, scaffolding_domain_error::ScaffoldingDomainError,
};

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn load(&self, kind: GeneratedUnitKind) -> Result<String, ScaffoldingDomainError>;
}
