use uuid::Uuid;

use crate::scaffolding::domain::model::enums::scaffolding_domain_error::ScaffoldingDomainError;

/// Row key of an attribute inside a draft. Never reaches generated output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AttributeId(Uuid);

impl AttributeId {
    pub fn new(value: String) -> Result<Self, ScaffoldingDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| ScaffoldingDomainError::InvalidIdentifier)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
