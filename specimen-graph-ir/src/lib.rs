//! Statement model shared by the specimen converter and its serializers
//!
//! - [`Term`]: an expanded IRI or a literal with an explicit [`Datatype`]
//!   (plain text is `xsd:string`). Prefixed names exist only in formatter
//!   output.
//! - [`Triple`]: one statement, ordered subject, predicate, object.
//! - [`Graph`]: an append-only buffer of triples with prefix bindings.
//!   Duplicates are kept until [`Graph::canonicalize`].
//!
//! ```
//! use specimen_graph_ir::{Graph, Term, Triple};
//!
//! let donor = "http://example.org/donor/1";
//! let mut graph = Graph::new();
//! graph.add_triple(Term::iri(donor), Term::iri("http://purl.org/ccf/age"), Term::integer(42));
//! graph.add(Triple::new(Term::iri(donor), Term::iri("http://purl.org/ccf/age"), Term::integer(42)));
//! graph.canonicalize();
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{escape_literal, LiteralValue, Term};
pub use triple::Triple;
