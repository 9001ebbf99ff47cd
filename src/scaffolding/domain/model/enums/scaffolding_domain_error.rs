use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldingDomainError {
    #[error("table name is required")]
    InvalidTableName,

    #[error("attribute name cannot be empty")]
    InvalidAttributeName,

    #[error("an attribute named \"{0}\" already exists")]
    DuplicateAttributeName(String),

    #[error("there are attributes with duplicated names")]
    DuplicateAttributeNames,

    #[error("identity can only be set on a primary key column; mark it as PK first")]
    IdentityRequiresPrimaryKey,

    #[error("identity is only allowed for integer types: int, bigint, smallint")]
    IdentityRequiresIntegerType,

    #[error("only one column can be marked as identity")]
    MultipleIdentityAttributes,

    #[error("add at least one attribute")]
    MissingAttributes,

    #[error("mark at least one column as primary key")]
    MissingPrimaryKey,

    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("invalid identifier")]
    InvalidIdentifier,

    #[error("table draft not found")]
    DraftNotFound,

    #[error("attribute not found")]
    AttributeNotFound,

    #[error("generated unit not found: {0}")]
    GeneratedUnitNotFound(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
