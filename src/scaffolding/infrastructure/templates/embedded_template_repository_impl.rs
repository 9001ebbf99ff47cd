use async_trait::async_trait;

use crate::scaffolding::{
    domain::model::enums::{
        generated_unit_kind::GeneratedUnitKind, scaffolding_domain_error::ScaffoldingDomainError,
    },
    infrastructure::templates::template_repository::TemplateRepository,
};

const ENTITY_TEMPLATE: &str = include_str!("../../../../templates/entity.vb.tmpl");
const MANAGER_TEMPLATE: &str = include_str!("../../../../templates/manager.vb.tmpl");
const CONTROL_BUSINESS_TEMPLATE: &str =
    include_str!("../../../../templates/controlBusiness.vb.tmpl");
const INTERFACE_TEMPLATE: &str = include_str!("../../../../templates/interfaceIWCF.vb.tmpl");
const WCF_IMPLEMENTATION_TEMPLATE: &str =
    include_str!("../../../../templates/wcfImplementation.vb.tmpl");

/// Templates compiled into the binary from `templates/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedTemplateRepositoryImpl;

impl EmbeddedTemplateRepositoryImpl {
    pub fn new() -> Self {
        Self
    }

    pub fn template(kind: GeneratedUnitKind) -> &'static str {
        match kind {
            GeneratedUnitKind::Entity => ENTITY_TEMPLATE,
            GeneratedUnitKind::Manager => MANAGER_TEMPLATE,
            GeneratedUnitKind::ControlBusiness => CONTROL_BUSINESS_TEMPLATE,
            GeneratedUnitKind::ServiceInterface => INTERFACE_TEMPLATE,
            GeneratedUnitKind::ServiceImplementation => WCF_IMPLEMENTATION_TEMPLATE,
        }
    }
}

#[async_trait]
impl TemplateRepository for EmbeddedTemplateRepositoryImpl {
    async fn load(&self, kind: GeneratedUnitKind) -> Result<String, ScaffoldingDomainError> {
        Ok(Self::template(kind).to_string())
    }
}
