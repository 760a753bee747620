//! RDF triple - a single subject/predicate/object statement

use crate::Term;
use std::fmt;

/// A single RDF statement
///
/// Ordering is SPO lexicographic (derived field order), which is what
/// `Graph::sort()` and the set-backed store rely on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject (always an IRI for specimen graphs)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (IRI reference or literal)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Create a triple whose subject, predicate and object are all IRIs
    pub fn iris(s: &str, p: &str, o: &str) -> Self {
        Self::new(Term::iri(s), Term::iri(p), Term::iri(o))
    }
}

/// N-Triples line (without the trailing newline)
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_display() {
        let t = Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(
            t.to_string(),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );
    }

    #[test]
    fn test_triple_ordering_is_spo() {
        let a = Triple::iris("http://a", "http://z", "http://z");
        let b = Triple::iris("http://b", "http://a", "http://a");
        assert!(a < b);

        let c = Triple::iris("http://a", "http://p", "http://1");
        let d = Triple::iris("http://a", "http://p", "http://2");
        assert!(c < d);
    }
}
