//! Statement buffer handed between the transformer and the formatters
//!
//! A `Graph` keeps statements in insertion order and tolerates duplicates
//! until [`Graph::canonicalize`] is called. Formatters always work on a
//! canonical copy, so output does not depend on emission order.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// Statements plus the prefix bindings used to render them
///
/// ```
/// use specimen_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_prefix("ccf", "http://purl.org/ccf/");
/// graph.add_triple(
///     Term::iri("http://example.org/block/1"),
///     Term::iri("http://purl.org/ccf/section_count"),
///     Term::integer(3),
/// );
/// graph.canonicalize();
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    /// prefix -> namespace IRI
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`, replacing any earlier binding
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.triples.push(Triple::new(s, p, o));
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        if self.is_sorted() {
            self.triples.binary_search(triple).is_ok()
        } else {
            self.triples.contains(triple)
        }
    }

    /// Sort SPO and drop duplicates
    pub fn canonicalize(&mut self) {
        self.triples.sort_unstable();
        self.triples.dedup();
    }

    pub fn is_sorted(&self) -> bool {
        self.triples.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Runs of consecutive statements sharing a subject
    ///
    /// Only yields one run per subject when the graph is canonical.
    pub fn group_by_subject(&self) -> impl Iterator<Item = (&Term, &[Triple])> + '_ {
        let mut rest = self.triples.as_slice();
        std::iter::from_fn(move || {
            let subject = &rest.first()?.s;
            let end = rest
                .iter()
                .position(|t| t.s != *subject)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            rest = tail;
            Some((subject, run))
        })
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CCF: &str = "http://purl.org/ccf/";

    fn donor_facts() -> Graph {
        let consortium = Term::iri(format!("{CCF}consortium_name"));
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("http://example.org/donor/2"),
            consortium.clone(),
            Term::string("HuBMAP"),
        );
        graph.add_triple(
            Term::iri("http://example.org/donor/1"),
            consortium,
            Term::string("HuBMAP"),
        );
        graph.add_triple(
            Term::iri("http://example.org/donor/1"),
            Term::iri(format!("{CCF}age")),
            Term::integer(44),
        );
        graph
    }

    #[test]
    fn test_canonicalize_sorts_and_collapses() {
        let mut graph = donor_facts();
        let dup = graph.triples()[0].clone();
        graph.add(dup.clone());
        assert_eq!(graph.len(), 4);
        assert!(!graph.is_sorted());

        graph.canonicalize();
        assert_eq!(graph.len(), 3);
        assert!(graph.is_sorted());
        assert!(graph.contains(&dup));
        assert_eq!(
            graph.iter().next().and_then(|t| t.s.as_iri()),
            Some("http://example.org/donor/1")
        );
    }

    #[test]
    fn test_group_by_subject_runs() {
        let mut graph = donor_facts();
        graph.canonicalize();

        let runs: Vec<_> = graph
            .group_by_subject()
            .map(|(s, run)| (s.as_iri().unwrap_or_default(), run.len()))
            .collect();
        assert_eq!(
            runs,
            vec![
                ("http://example.org/donor/1", 2),
                ("http://example.org/donor/2", 1)
            ]
        );
        assert_eq!(Graph::new().group_by_subject().count(), 0);
    }

    #[test]
    fn test_prefix_rebinding() {
        let mut graph = Graph::new();
        graph.add_prefix("ccf", "http://example.org/old/");
        graph.add_prefix("ccf", CCF);
        assert_eq!(graph.prefixes.len(), 1);
        assert_eq!(graph.prefixes["ccf"], CCF);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut graph: Graph = [Triple::iris("http://s", "http://p", "http://o")]
            .into_iter()
            .collect();
        graph.extend([Triple::iris("http://s", "http://p", "http://o2")]);
        assert_eq!(graph.len(), 2);
        assert!(graph.prefixes.is_empty());
    }
}
