use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use super::thing::Thing;

/// Filename of the one metadata dataset a container may hold.
pub const DATASET_FILENAME: &str = "metadata.json";

/// A container's metadata dataset: one [`Thing`] per stored file.
///
/// Keys are the stringified subject URLs, matching each Thing's own
/// subject. String keys keep the map JSON-serializable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    things: BTreeMap<String, Thing>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-replace by subject URL.
    ///
    /// Returns the record the new one replaced, if any.
    pub fn set_thing(&mut self, thing: Thing) -> Option<Thing> {
        self.things.insert(thing.subject().to_string(), thing)
    }

    pub fn get_thing(&self, subject: &Url) -> Option<&Thing> {
        self.things.get(subject.as_str())
    }

    pub fn remove_thing(&mut self, subject: &Url) -> Option<Thing> {
        self.things.remove(subject.as_str())
    }

    pub fn things(&self) -> impl Iterator<Item = &Thing> {
        self.things.values()
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    /// The conventional dataset location inside a container.
    pub fn url_in(container: &Url) -> Url {
        // container URLs end in '/', so a relative join lands inside
        container
            .join(DATASET_FILENAME)
            .expect("container URL is a valid base")
    }

    /// Whether a contained resource URL is the container's dataset.
    pub fn is_dataset_url(url: &Url) -> bool {
        url.path_segments()
            .and_then(|segments| segments.last())
            .map(|name| name == DATASET_FILENAME)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn thing(subject: &str, name: &str) -> Thing {
        Thing::new(
            Url::parse(subject).unwrap(),
            name,
            "Passport",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "test",
        )
    }

    #[test]
    fn test_new_subject_is_added() {
        let mut dataset = Dataset::new();
        dataset.set_thing(thing("https://pod/Passport/a.pdf", "a.pdf"));
        dataset.set_thing(thing("https://pod/Passport/b.pdf", "b.pdf"));
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_same_subject_replaces() {
        let mut dataset = Dataset::new();
        dataset.set_thing(thing("https://pod/Passport/a.pdf", "a.pdf"));
        let replaced = dataset.set_thing(thing("https://pod/Passport/a.pdf", "renamed.pdf"));
        assert_eq!(replaced.unwrap().name(), "a.pdf");
        assert_eq!(dataset.len(), 1);
        let subject = Url::parse("https://pod/Passport/a.pdf").unwrap();
        assert_eq!(dataset.get_thing(&subject).unwrap().name(), "renamed.pdf");
    }

    #[test]
    fn test_dataset_location() {
        let container = Url::parse("https://pod/Bank%20Statement/").unwrap();
        let url = Dataset::url_in(&container);
        assert_eq!(url.as_str(), "https://pod/Bank%20Statement/metadata.json");
        assert!(Dataset::is_dataset_url(&url));
        assert!(!Dataset::is_dataset_url(
            &Url::parse("https://pod/Bank%20Statement/statement.pdf").unwrap()
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut dataset = Dataset::new();
        dataset.set_thing(thing("https://pod/Passport/a.pdf", "a.pdf"));
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(dataset, back);
    }
}
