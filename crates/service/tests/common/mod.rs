//! Shared test utilities for document pipeline tests
#![allow(dead_code)]

use bytes::Bytes;
use chrono::NaiveDate;

use ::common::config::PodConfig;
use ::common::docs::{DocumentMeta, DocumentType};
use ::common::identity::{Session, WebId};
use ::common::pod::PodStore;
use service::{DocumentUpload, Documents};

pub const ALICE: &str = "https://alice.solidcommunity.net/profile/card#me";
pub const BOB: &str = "https://bob.solidcommunity.net/profile/card#me";

pub fn session(web_id: &str) -> Session {
    Session::unauthenticated(WebId::parse(web_id).unwrap())
}

/// Set up a document service for Alice over a fresh in-process pod.
pub fn setup_test_env() -> (Documents, PodStore) {
    let store = PodStore::memory();
    let docs = Documents::new(session(ALICE), store.clone(), PodConfig::default());
    (docs, store)
}

/// A document service for another identity against the same pod.
pub fn docs_for(web_id: &str, store: &PodStore) -> Documents {
    Documents::new(session(web_id), store.clone(), PodConfig::default())
}

pub fn upload(
    doc_type: DocumentType,
    file_name: &str,
    date: &str,
    description: &str,
) -> DocumentUpload {
    DocumentUpload {
        file_name: file_name.to_string(),
        content_type: None,
        bytes: Bytes::from_static(b"%PDF-1.4 test"),
        meta: DocumentMeta::new(doc_type, date.parse::<NaiveDate>().unwrap(), description),
    }
}

pub fn passport(file_name: &str) -> DocumentUpload {
    upload(
        DocumentType::Passport,
        file_name,
        "2024-01-01",
        "passport scan",
    )
}
