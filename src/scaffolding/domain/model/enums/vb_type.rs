/// VB.NET type a SQL column is declared with in generated code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VbType {
    Integer,
    Long,
    Decimal,
    Double,
    String,
    DateTime,
    Boolean,
}

impl VbType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::Boolean => "Boolean",
        }
    }

    /// Literal assigned to a field of this type in `Initialize()`.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Self::Integer | Self::Long => "0",
            Self::Decimal | Self::Double => "0D",
            Self::Boolean => "False",
            Self::DateTime => "CDate(\"1900/01/01\")",
            Self::String => "\"\"",
        }
    }
}
