use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::docs::DocumentMeta;

/// A named record inside a dataset, identified by its subject URL.
///
/// For document metadata the subject is the stored file's assigned URL
/// and the fields are the fixed set {name, identifier, end_date,
/// description}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thing {
    subject: Url,
    name: String,
    identifier: String,
    end_date: NaiveDate,
    description: String,
}

impl Thing {
    pub fn new(
        subject: Url,
        name: impl Into<String>,
        identifier: impl Into<String>,
        end_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            name: name.into(),
            identifier: identifier.into(),
            end_date,
            description: description.into(),
        }
    }

    /// The record for a newly placed file.
    pub fn for_document(subject: Url, file_name: impl Into<String>, meta: &DocumentMeta) -> Self {
        Self::new(
            subject,
            file_name,
            meta.doc_type.label(),
            meta.end_date,
            meta.description.clone(),
        )
    }

    pub fn subject(&self) -> &Url {
        &self.subject
    }

    /// Original filename of the stored document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document-type label.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
