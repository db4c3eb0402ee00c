//! Full container lifecycle: absent, created, populated, merged, deleted

mod common;

use ::common::docs::{DocumentType, FetchMode};
use service::FetchError;

#[tokio::test]
async fn test_container_lifecycle() {
    let (docs, store) = common::setup_test_env();

    // absent
    assert!(matches!(
        docs.fetch_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
            .await,
        Err(FetchError::NotFoundOrUnauthorized)
    ));

    // created + populated
    docs.upload_document(common::upload(
        DocumentType::Passport,
        "passport.pdf",
        "2024-01-01",
        "passport scan",
    ))
    .await
    .unwrap();

    let container = docs
        .fetch_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
        .await
        .unwrap();
    assert_eq!(container.as_str(), "https://alice.solidcommunity.net/Passport/");
    assert!(store
        .read_acl(docs.session(), &container)
        .await
        .unwrap()
        .is_some());

    // merged
    docs.upload_document(common::passport("renewal.pdf"))
        .await
        .unwrap();
    let things = docs
        .list_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
        .await
        .unwrap();
    assert_eq!(things.len(), 2);

    // deleted, in two phases
    let container = docs
        .delete_document_file(DocumentType::Passport)
        .await
        .unwrap();
    docs.delete_document_container(&container).await.unwrap();

    assert!(matches!(
        docs.fetch_documents(DocumentType::Passport, FetchMode::SelfFetch, None)
            .await,
        Err(FetchError::NotFoundOrUnauthorized)
    ));
}
