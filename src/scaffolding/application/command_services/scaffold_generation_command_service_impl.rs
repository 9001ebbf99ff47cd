use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::scaffolding::{
    application::generators::FRAGMENT_GENERATORS,
    domain::{
        model::{
            commands::generate_scaffold_command::GenerateScaffoldCommand,
            entities::generated_unit::GeneratedUnit,
            enums::scaffolding_domain_error::ScaffoldingDomainError,
        },
        services::scaffold_generation_command_service::ScaffoldGenerationCommandService,
    },
    infrastructure::templates::template_repository::TemplateRepository,
};

pub struct ScaffoldGenerationCommandServiceImpl {
    template_repository: Arc<dyn TemplateRepository>,
}

impl ScaffoldGenerationCommandServiceImpl {
    pub fn new(template_repository: Arc<dyn TemplateRepository>) -> Self {
        Self {
            template_repository,
        }
    }
}

#[async_trait]
impl ScaffoldGenerationCommandService for ScaffoldGenerationCommandServiceImpl {
    async fn handle_generate(
        &self,
        command: GenerateScaffoldCommand,
    ) -> Result<Vec<GeneratedUnit>, ScaffoldingDomainError> {
        let description = command.description();

        // load every template before generating anything so a failure yields no units
        let mut templates = Vec::with_capacity(FRAGMENT_GENERATORS.len());
        for (kind, _) in FRAGMENT_GENERATORS.iter() {
            templates.push(self.template_repository.load(*kind).await?);
        }

        let units: Vec<GeneratedUnit> = FRAGMENT_GENERATORS
            .iter()
            .zip(templates.iter())
            .map(|((kind, generate), template)| {
                let unit = generate(description, template.as_str());
                debug!(kind = kind.as_str(), filename = %unit.filename, "fragment generated");
                unit
            })
            .collect();

        info!(
            table = description.table_name().value(),
            category = description.category().as_str(),
            attributes = description.attributes().len(),
            units = units.len(),
            "scaffold generated"
        );

        Ok(units)
    }
}
