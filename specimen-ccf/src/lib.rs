//! Specimen records to CCF graph statements
//!
//! Converts nested specimen JSON (donors, the tissue blocks and sections cut
//! from them, and the datasets generated from those samples) into RDF
//! statements in the CCF vocabulary.
//!
//! A conversion run has two parts:
//!
//! - [`GraphStore`]: a set of statements seeded with the ontology header and
//!   object-property declarations. Every document is merged into it.
//! - [`Transformer`]: walks one document and merges the statements for it.
//!   A document that fails (unknown type tag, section outside a block,
//!   missing required field) contributes nothing.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use specimen_ccf::{GraphStore, Transformer};
//! use specimen_vocab::Vocabulary;
//!
//! let vocab = Vocabulary::ccf();
//! let mut store = GraphStore::create("https://example.org/specimens.owl", &vocab);
//! let transformer = Transformer::new(vocab);
//!
//! let doc = json!({
//!     "@type": "Donor",
//!     "@id": "https://example.org/donor/1",
//!     "consortium_name": "ConsortiumX"
//! });
//! let added = transformer.transform(&doc, &mut store).unwrap();
//! assert_eq!(added, 4);
//! ```

pub mod error;
pub mod model;
mod store;
mod transform;

pub use error::{Result, TransformError};
pub use store::GraphStore;
pub use transform::Transformer;
