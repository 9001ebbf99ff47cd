/// The five fragments of one generation run, in output order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum GeneratedUnitKind {
    Entity,
    Manager,
    ControlBusiness,
    ServiceInterface,
    ServiceImplementation,
}

impl GeneratedUnitKind {
    pub const ORDERED: [GeneratedUnitKind; 5] = [
        Self::Entity,
        Self::Manager,
        Self::ControlBusiness,
        Self::ServiceInterface,
        Self::ServiceImplementation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Manager => "manager",
            Self::ControlBusiness => "control_business",
            Self::ServiceInterface => "service_interface",
            Self::ServiceImplementation => "service_implementation",
        }
    }

    pub fn template_file_name(&self) -> &'static str {
        match self {
            Self::Entity => "entity.vb.tmpl",
            Self::Manager => "manager.vb.tmpl",
            Self::ControlBusiness => "controlBusiness.vb.tmpl",
            Self::ServiceInterface => "interfaceIWCF.vb.tmpl",
            Self::ServiceImplementation => "wcfImplementation.vb.tmpl",
        }
    }
}
