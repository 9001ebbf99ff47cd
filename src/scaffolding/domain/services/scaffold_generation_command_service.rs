use async_trait::async_trait;

use crate::scaffolding::domain::model::{
    commands::generate_scaffold_command::GenerateScaffoldCommand,
    entities::generated_unit::GeneratedUnit,
    enums::scaffolding_domain_error::ScaffoldingDomainError,
};

#[async_trait]
pub trait ScaffoldGenerationCommandService: Send + Sync {
    /// Produces the five units of a run, in fixed order, or nothing at all.
    async fn handle_generate(
        &self,
        command: GenerateScaffoldCommand,
    ) -> Result<Vec<GeneratedUnit>, ScaffoldingDomainError>;
}
