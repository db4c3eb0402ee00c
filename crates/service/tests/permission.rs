//! Integration tests for the permission manager

mod common;

use ::common::acl::AccessModes;
use ::common::docs::{DocumentType, FetchMode};
use ::common::identity::WebId;
use service::{AclAction, FetchError, PermissionError};

fn bob_web_id() -> WebId {
    WebId::parse(common::BOB).unwrap()
}

#[tokio::test]
async fn test_give_sets_grantee_read() {
    let (docs, store) = common::setup_test_env();
    let receipt = docs
        .upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    docs.set_doc_acl_permission(DocumentType::Passport, AclAction::Give, "bob")
        .await
        .unwrap();

    let acl = store
        .read_acl(docs.session(), &receipt.container_url)
        .await
        .unwrap()
        .unwrap();
    let grantee = acl.agent_access(&bob_web_id()).unwrap();
    assert!(grantee.resource.read);
    assert!(grantee.default.read);
    assert!(!grantee.resource.write);
    assert!(!grantee.resource.append);
    assert!(!grantee.resource.control);
}

#[tokio::test]
async fn test_revoke_clears_grantee_read_and_spares_owner() {
    let (docs, store) = common::setup_test_env();
    let receipt = docs
        .upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    docs.set_doc_acl_permission(DocumentType::Passport, AclAction::Give, "bob")
        .await
        .unwrap();
    docs.set_doc_acl_permission(DocumentType::Passport, AclAction::Revoke, "bob")
        .await
        .unwrap();

    let acl = store
        .read_acl(docs.session(), &receipt.container_url)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(acl.len(), 2);

    let grantee = acl.agent_access(&bob_web_id()).unwrap();
    assert!(!grantee.resource.read);
    assert!(!grantee.default.read);

    let owner = acl.agent_access(docs.session().web_id()).unwrap();
    assert_eq!(owner.resource, AccessModes::FULL);
    assert_eq!(owner.default, AccessModes::FULL);
}

#[tokio::test]
async fn test_grant_before_any_upload_fails() {
    let (docs, _store) = common::setup_test_env();

    let result = docs
        .set_doc_acl_permission(DocumentType::Passport, AclAction::Give, "bob")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_grant_on_container_without_acl_is_acl_missing() {
    let (docs, store) = common::setup_test_env();

    // a container that exists but never went through an upload
    let container = url::Url::parse("https://alice.solidcommunity.net/Passport/").unwrap();
    store
        .ensure_container(docs.session(), &container)
        .await
        .unwrap();

    let result = docs
        .set_doc_acl_permission(DocumentType::Passport, AclAction::Give, "bob")
        .await;
    assert!(matches!(result, Err(PermissionError::AclMissing(_))));
}

#[tokio::test]
async fn test_grant_then_revoke_gates_cross_fetch() {
    let (docs, store) = common::setup_test_env();
    docs.upload_document(common::passport("scan.pdf"))
        .await
        .unwrap();

    let bob = common::docs_for(common::BOB, &store);

    // no grant yet
    let result = bob
        .fetch_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await;
    assert!(matches!(result, Err(FetchError::NotFoundOrUnauthorized)));

    docs.set_doc_acl_permission(DocumentType::Passport, AclAction::Give, "bob")
        .await
        .unwrap();

    let url = bob
        .fetch_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await
        .unwrap();
    let things = bob
        .list_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await
        .unwrap();
    assert_eq!(url.as_str(), "https://alice.solidcommunity.net/Passport/");
    assert_eq!(things.len(), 1);

    docs.set_doc_acl_permission(DocumentType::Passport, AclAction::Revoke, "bob")
        .await
        .unwrap();

    let result = bob
        .fetch_documents(DocumentType::Passport, FetchMode::CrossFetch, Some("alice"))
        .await;
    assert!(matches!(result, Err(FetchError::NotFoundOrUnauthorized)));
}
