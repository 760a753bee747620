//! Accumulating statement store
//!
//! `GraphStore` is the target of every transform in a conversion run. It is
//! seeded once with the ontology header and the object-property
//! declarations, then grows by [`GraphStore::merge`]. Storage is a
//! `BTreeSet`, so duplicate statements collapse and iteration order is
//! canonical regardless of merge order.

use specimen_graph_ir::{Graph, Term, Triple};
use specimen_vocab::{owl, rdf, Vocabulary};
use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

/// Set of statements accumulated over a conversion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphStore {
    ontology_iri: String,
    triples: BTreeSet<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl GraphStore {
    /// Create a store seeded with the ontology header and the declarations
    /// of every relational predicate in `vocab`
    pub fn create(ontology_iri: impl Into<String>, vocab: &Vocabulary) -> Self {
        let ontology_iri = ontology_iri.into();
        let mut triples = BTreeSet::new();

        triples.insert(Triple::iris(&ontology_iri, rdf::TYPE, owl::ONTOLOGY));
        for property in vocab.object_properties() {
            triples.insert(Triple::iris(property, rdf::TYPE, owl::OBJECT_PROPERTY));
        }

        let prefixes = vocab
            .prefixes()
            .into_iter()
            .map(|(prefix, ns)| (prefix.to_string(), ns))
            .collect();

        Self {
            ontology_iri,
            triples,
            prefixes,
        }
    }

    /// IRI of the ontology header subject
    pub fn ontology_iri(&self) -> &str {
        &self.ontology_iri
    }

    /// Add statements, returning how many were not already present
    pub fn merge<I>(&mut self, triples: I) -> usize
    where
        I: IntoIterator<Item = Triple>,
    {
        triples
            .into_iter()
            .filter(|t| self.triples.insert(t.clone()))
            .count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Statements in canonical order
    pub fn iter(&self) -> btree_set::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Statements with `subject` and `predicate`
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.s.as_iri() == Some(subject) && t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
    }

    /// Copy the accumulated statements and prefix bindings out for a
    /// serializer
    ///
    /// The returned graph is already canonical (sorted, no duplicates).
    pub fn handoff(&self) -> Graph {
        let mut graph: Graph = self.triples.iter().cloned().collect();
        for (prefix, ns) in &self.prefixes {
            graph.add_prefix(prefix.clone(), ns.clone());
        }
        graph
    }
}

impl<'a> IntoIterator for &'a GraphStore {
    type Item = &'a Triple;
    type IntoIter = btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
