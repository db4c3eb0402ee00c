//! # Metadata datasets
//!
//! Each document container holds at most one metadata dataset: a map of
//! [`Thing`] records, one per stored file, keyed by the file's assigned
//! URL (the record's *subject*).
//!
//! ## Merge semantics
//!
//! Inserting a Thing whose subject already exists replaces the old
//! record (replace-by-identity); a new subject is added alongside the
//! existing ones. A container never grows a second dataset: writers
//! merge into the one at the conventional location instead.

mod dataset;
mod thing;

pub use dataset::{Dataset, DATASET_FILENAME};
pub use thing::Thing;
