//! RDF graph formatters
//!
//! This crate converts a `specimen_graph_ir::Graph` to text:
//!
//! - **Turtle**: compact, prefixed, grouped by subject
//! - **N-Triples**: one fully expanded statement per line
//!
//! Both formatters canonicalize (sort + dedupe) a copy of the graph first, so
//! output is byte-stable for a given set of statements.
//!
//! # Example
//!
//! ```
//! use specimen_graph_ir::{Graph, Term};
//! use specimen_graph_format::{format_turtle, TurtleFormatConfig};
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("ccf", "http://purl.org/ccf/");
//! graph.add_triple(
//!     Term::iri("http://example.org/block/1"),
//!     Term::iri("http://purl.org/ccf/section_count"),
//!     Term::integer(3),
//! );
//!
//! let ttl = format_turtle(&graph, &TurtleFormatConfig::default());
//! assert!(ttl.contains("ccf:section_count 3 ."));
//! ```

mod error;
mod ntriples;
mod turtle;

pub use error::{FormatError, Result};
pub use ntriples::format_ntriples;
pub use turtle::{format_turtle, PrefixPolicy, TurtleFormatConfig};

use specimen_graph_ir::Graph;
use std::fmt;
use std::str::FromStr;

/// Supported textual output formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Turtle (`.ttl`)
    #[default]
    Turtle,
    /// N-Triples (`.nt`)
    NTriples,
}

impl OutputFormat {
    /// Render a graph in this format with default settings
    pub fn format(self, graph: &Graph) -> String {
        match self {
            OutputFormat::Turtle => format_turtle(graph, &TurtleFormatConfig::default()),
            OutputFormat::NTriples => format_ntriples(graph),
        }
    }

    /// Canonical name, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Turtle => "turtle",
            OutputFormat::NTriples => "ntriples",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(OutputFormat::NTriples),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
