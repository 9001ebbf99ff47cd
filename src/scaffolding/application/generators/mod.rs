use crate::scaffolding::domain::model::{
    entities::{generated_unit::GeneratedUnit, table_description::TableDescription},
    enums::generated_unit_kind::GeneratedUnitKind,
};

pub mod control_business_generator;
pub mod entity_generator;
pub mod interface_generator;
pub mod manager_generator;
pub mod table_naming;
pub mod template_renderer;
pub mod vb_helpers;
pub mod wcf_implementation_generator;

pub type FragmentGenerator = fn(&TableDescription, &str) -> GeneratedUnit;

/// Generators of one run, in output order.
pub const FRAGMENT_GENERATORS: [(GeneratedUnitKind, FragmentGenerator); 5] = [
    (
        GeneratedUnitKind::Entity,
        entity_generator::generate_entity_file,
    ),
    (
        GeneratedUnitKind::Manager,
        manager_generator::generate_manager_file,
    ),
    (
        GeneratedUnitKind::ControlBusiness,
        control_business_generator::generate_control_business_fragment,
    ),
    (
        GeneratedUnitKind::ServiceInterface,
        interface_generator::generate_interface_fragment,
    ),
    (
        GeneratedUnitKind::ServiceImplementation,
        wcf_implementation_generator::generate_wcf_implementation_fragment,
    ),
];
