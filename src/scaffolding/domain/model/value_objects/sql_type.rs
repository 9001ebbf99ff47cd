use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PRECISION_SUFFIX: Regex = Regex::new(r"\(.*\)").expect("valid regex");
}

const IDENTITY_CAPABLE_TYPES: [&str; 3] = ["int", "bigint", "smallint"];

/// Abstract SQL column type, e.g. `varchar(50)` or `decimal(10,2)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SqlType(String);

impl SqlType {
    pub fn new(value: String) -> Self {
        Self(value.trim().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Lower-cased type keyword with any `(precision)` suffix removed.
    pub fn bare(raw: &str) -> String {
        let lowered = raw.trim().to_lowercase();
        PRECISION_SUFFIX.replace(&lowered, "").trim().to_string()
    }

    pub fn is_identity_capable(&self) -> bool {
        let bare = Self::bare(&self.0);
        IDENTITY_CAPABLE_TYPES.contains(&bare.as_str())
    }

    pub fn is_text(&self) -> bool {
        let lowered = self.0.to_lowercase();
        lowered.contains("char") || lowered.contains("text")
    }
}
