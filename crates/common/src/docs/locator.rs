use url::Url;

use crate::config::{PodConfig, PodConfigError};
use crate::identity::WebId;

use super::doc_type::{DocumentType, FetchMode};

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("cross-pod resolution requires a target pod")]
    MissingOtherPod,
    #[error(transparent)]
    Config(#[from] PodConfigError),
    #[error("pod root '{0}' cannot hold containers")]
    UnusableRoot(Url),
}

/// Resolve the canonical container URL for a document type.
///
/// Self mode derives the pod root from the caller's own WebID; cross
/// mode builds it from the supplied pod name or host, completed with the
/// configured provider. Multi-word type names are percent-encoded into
/// the path segment.
pub fn container_url(
    doc_type: DocumentType,
    mode: FetchMode,
    web_id: &WebId,
    other_pod: Option<&str>,
    config: &PodConfig,
) -> Result<Url, LocatorError> {
    let root = match mode {
        FetchMode::SelfFetch => web_id.pod_root(),
        FetchMode::CrossFetch => {
            let other_pod = other_pod.ok_or(LocatorError::MissingOtherPod)?;
            config.pod_root(other_pod)?
        }
    };
    let mut container = root.clone();
    {
        let mut segments = container
            .path_segments_mut()
            .map_err(|_| LocatorError::UnusableRoot(root.clone()))?;
        segments.pop_if_empty().push(doc_type.label()).push("");
    }
    Ok(container)
}

/// Locator entry point over a raw type name.
///
/// Unrecognized names resolve to no location, as does any resolution
/// failure.
pub fn locate(
    name: &str,
    mode: FetchMode,
    web_id: &WebId,
    other_pod: Option<&str>,
    config: &PodConfig,
) -> Option<Url> {
    let doc_type = DocumentType::parse(name)?;
    container_url(doc_type, mode, web_id, other_pod, config).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> WebId {
        WebId::parse("https://alice.solidcommunity.net/profile/card#me").unwrap()
    }

    #[test]
    fn test_self_fetch_resolves_under_own_pod() {
        let url = container_url(
            DocumentType::Passport,
            FetchMode::SelfFetch,
            &alice(),
            None,
            &PodConfig::default(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://alice.solidcommunity.net/Passport/");
    }

    #[test]
    fn test_multi_word_types_are_encoded() {
        for (doc_type, segment) in [
            (DocumentType::BankStatement, "Bank%20Statement"),
            (DocumentType::DriversLicense, "Drivers%20License"),
        ] {
            let url = container_url(
                doc_type,
                FetchMode::SelfFetch,
                &alice(),
                None,
                &PodConfig::default(),
            )
            .unwrap();
            assert_eq!(
                url.as_str(),
                format!("https://alice.solidcommunity.net/{segment}/")
            );
        }
    }

    #[test]
    fn test_cross_fetch_builds_from_pod_name() {
        let url = container_url(
            DocumentType::Passport,
            FetchMode::CrossFetch,
            &alice(),
            Some("bob"),
            &PodConfig::default(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://bob.solidcommunity.net/Passport/");
    }

    #[test]
    fn test_cross_fetch_without_target_fails() {
        let result = container_url(
            DocumentType::Passport,
            FetchMode::CrossFetch,
            &alice(),
            None,
            &PodConfig::default(),
        );
        assert!(matches!(result, Err(LocatorError::MissingOtherPod)));
    }

    #[test]
    fn test_unknown_name_has_no_location() {
        let location = locate(
            "Tax Return",
            FetchMode::SelfFetch,
            &alice(),
            None,
            &PodConfig::default(),
        );
        assert_eq!(location, None);
    }

    #[test]
    fn test_known_names_resolve_to_encoded_segment() {
        for doc_type in DocumentType::ALL {
            let location = locate(
                doc_type.label(),
                FetchMode::SelfFetch,
                &alice(),
                None,
                &PodConfig::default(),
            )
            .unwrap();
            let expected = doc_type.label().replace(' ', "%20");
            assert!(location.as_str().ends_with(&format!("{expected}/")));
        }
    }
}
