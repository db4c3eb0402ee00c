use serde::{Deserialize, Serialize};

/// The closed set of document categories a pod vault holds.
///
/// The category determines the container the document is stored in; the
/// display name doubles as the container path segment (percent-encoded
/// by the locator) and as the `identifier` field of the document's
/// metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    BankStatement,
    Passport,
    DriversLicense,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::BankStatement,
        DocumentType::Passport,
        DocumentType::DriversLicense,
    ];

    /// Display name for the category.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::BankStatement => "Bank Statement",
            DocumentType::Passport => "Passport",
            DocumentType::DriversLicense => "Drivers License",
        }
    }

    /// Parse a display name; unrecognized names do not resolve.
    pub fn parse(name: &str) -> Option<DocumentType> {
        Self::ALL.into_iter().find(|t| t.label() == name)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

/// Whether an operation targets the caller's own pod or another,
/// externally-named pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchMode {
    SelfFetch,
    CrossFetch,
}
