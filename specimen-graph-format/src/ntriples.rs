//! N-Triples formatter

use specimen_graph_ir::Graph;
use std::fmt::Write;

/// Format a graph as N-Triples, one sorted statement per line
pub fn format_ntriples(graph: &Graph) -> String {
    let mut graph = graph.clone();
    graph.canonicalize();

    let mut out = String::with_capacity(graph.len() * 96);
    for triple in graph.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{triple}");
    }
    out
}
