use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE, IF_NONE_MATCH, LINK, LOCATION};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::acl::AclResource;
use crate::dataset::Dataset;
use crate::identity::Session;

use super::backend::PodBackend;
use super::error::{PodError, Result};
use super::resource::ContainerItem;

const SLUG: &str = "Slug";
const CONTAINER_LINK: &str = "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";
const JSON: &str = "application/json";

/// Pod backend over live HTTP.
///
/// Requests go out through the session's authenticated client; the
/// backend itself is stateless. Containers are created with `PUT` +
/// `If-None-Match: *` (the store reports an existing container as a
/// precondition failure, which counts as success here), files with
/// `POST` + `Slug` (the assigned URL comes back in `Location`), and
/// datasets, listings, and ACL resources as JSON bodies.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend;

/// Listing body returned by a container `GET`.
#[derive(Debug, Serialize, Deserialize)]
struct ContainerListing {
    contains: Vec<ContainerItem>,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self
    }

    /// Map a non-success status onto the pod error taxonomy.
    async fn reject(url: &Url, response: Response) -> PodError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PodError::Unauthorized(url.clone())
            }
            StatusCode::NOT_FOUND => PodError::NotFound(url.clone()),
            StatusCode::CONFLICT => PodError::ContainerNotEmpty(url.clone()),
            _ => PodError::Status {
                status,
                url: url.clone(),
                body: response.text().await.unwrap_or_default(),
            },
        }
    }
}

#[async_trait]
impl PodBackend for HttpBackend {
    async fn ensure_container(&self, session: &Session, url: &Url) -> Result<()> {
        let response = session
            .http()
            .put(url.clone())
            .header(IF_NONE_MATCH, HeaderValue::from_static("*"))
            .header(LINK, HeaderValue::from_static(CONTAINER_LINK))
            .send()
            .await?;
        // an existing container fails the precondition, which is fine
        if response.status() == StatusCode::PRECONDITION_FAILED {
            debug!(url = %url, "container already exists");
            return Ok(());
        }
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::reject(url, response).await)
    }

    async fn put_file(
        &self,
        session: &Session,
        container: &Url,
        slug: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<Url> {
        let response = session
            .http()
            .post(container.clone())
            .header(SLUG, slug)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(container, response).await);
        }
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| PodError::MissingLocation {
                container: container.clone(),
                slug: slug.to_string(),
            })?;
        // Location may be absolute or container-relative
        let assigned = container.join(location)?;
        Ok(assigned)
    }

    async fn list_container(&self, session: &Session, url: &Url) -> Result<Vec<ContainerItem>> {
        let response = session
            .http()
            .get(url.clone())
            .header(reqwest::header::ACCEPT, JSON)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(url, response).await);
        }
        let listing: ContainerListing = response.json().await?;
        Ok(listing.contains)
    }

    async fn get_dataset(&self, session: &Session, url: &Url) -> Result<Dataset> {
        let response = session
            .http()
            .get(url.clone())
            .header(reqwest::header::ACCEPT, JSON)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(url, response).await);
        }
        Ok(response.json().await?)
    }

    async fn save_dataset(&self, session: &Session, url: &Url, dataset: &Dataset) -> Result<()> {
        let response = session
            .http()
            .put(url.clone())
            .json(dataset)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(url, response).await);
        }
        Ok(())
    }

    async fn delete_file(&self, session: &Session, url: &Url) -> Result<()> {
        let response = session.http().delete(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(url, response).await);
        }
        Ok(())
    }

    async fn delete_container(&self, session: &Session, url: &Url) -> Result<()> {
        let response = session.http().delete(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(url, response).await);
        }
        Ok(())
    }

    async fn read_acl(&self, session: &Session, target: &Url) -> Result<Option<AclResource>> {
        let acl_url = AclResource::acl_url_for(target);
        let response = session
            .http()
            .get(acl_url.clone())
            .header(reqwest::header::ACCEPT, JSON)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::reject(&acl_url, response).await);
        }
        Ok(Some(response.json().await?))
    }

    async fn save_acl(&self, session: &Session, target: &Url, acl: &AclResource) -> Result<()> {
        let acl_url = AclResource::acl_url_for(target);
        let response = session.http().put(acl_url.clone()).json(acl).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(&acl_url, response).await);
        }
        Ok(())
    }
}
