use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::doc_type::DocumentType;

/// Caller-supplied metadata for a document upload.
///
/// Becomes the fixed field set of the document's metadata record: the
/// type label is stored as the record's `identifier`, the date as its
/// `end_date` (expiry or statement date, depending on the category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub doc_type: DocumentType,
    pub end_date: NaiveDate,
    pub description: String,
}

impl DocumentMeta {
    pub fn new(doc_type: DocumentType, end_date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            doc_type,
            end_date,
            description: description.into(),
        }
    }
}
