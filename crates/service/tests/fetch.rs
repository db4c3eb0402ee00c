//! Integration tests for document retrieval

mod common;

use ::common::docs::{DocumentType, FetchMode};
use service::FetchError;

#[tokio::test]
async fn test_fetch_before_upload_is_uniform_failure() {
    let (docs, _store) = common::setup_test_env();

    let result = docs
        .fetch_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
        .await;
    assert!(matches!(result, Err(FetchError::NotFoundOrUnauthorized)));
}

#[tokio::test]
async fn test_fetch_after_upload_returns_container() {
    let (docs, _store) = common::setup_test_env();
    docs.upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    let url = docs
        .fetch_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
        .await
        .unwrap();
    assert_eq!(url.as_str(), "https://alice.solidcommunity.net/Passport/");
}

#[tokio::test]
async fn test_cross_fetch_of_own_pod_by_name() {
    let (docs, _store) = common::setup_test_env();
    docs.upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    let url = docs
        .fetch_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await
        .unwrap();
    assert_eq!(url.as_str(), "https://alice.solidcommunity.net/Passport/");
}

#[tokio::test]
async fn test_cross_fetch_without_grant_is_uniform_failure() {
    let (docs, store) = common::setup_test_env();
    docs.upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    // Bob can resolve the container URL but not read it; the error does
    // not say which half failed
    let bob = common::docs_for(common::BOB, &store);
    let result = bob
        .fetch_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await;
    assert!(matches!(result, Err(FetchError::NotFoundOrUnauthorized)));

    // ...and the same error shape for a container that does not exist
    let result = bob
        .fetch_documents(
            DocumentType::DriversLicense,
            FetchMode::CrossFetch,
            Some("alice"),
        )
        .await;
    assert!(matches!(result, Err(FetchError::NotFoundOrUnauthorized)));
}

#[tokio::test]
async fn test_list_documents_on_fresh_container_is_empty() {
    let (docs, store) = common::setup_test_env();

    // container exists but holds no dataset yet
    let container = url::Url::parse("https://alice.solidcommunity.net/Passport/").unwrap();
    store
        .ensure_container(docs.session(), &container)
        .await
        .unwrap();

    let things = docs
        .list_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
        .await
        .unwrap();
    assert!(things.is_empty());
}
