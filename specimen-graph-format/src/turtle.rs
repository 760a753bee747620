//! Turtle graph formatter
//!
//! Formats a `Graph` as Turtle: `@prefix` declarations followed by one
//! block per subject. Predicates of a subject are joined with ` ;`, objects
//! sharing a predicate with `,`. `rdf:type` is written as `a` and always
//! leads the block.

use specimen_graph_ir::{escape_literal, Graph, LiteralValue, Term, Triple};
use specimen_vocab::{rdf, xsd};
use std::collections::BTreeSet;

/// Which `@prefix` declarations to emit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// Only prefixes that at least one rendered IRI uses
    #[default]
    UsedOnly,
    /// Every prefix bound on the graph
    All,
}

/// Configuration for Turtle formatting
#[derive(Clone, Debug)]
pub struct TurtleFormatConfig {
    /// Which prefixes to declare in the header
    pub prefix_policy: PrefixPolicy,
    /// Indentation for continuation lines of a subject block
    pub indent: usize,
}

impl Default for TurtleFormatConfig {
    fn default() -> Self {
        Self {
            prefix_policy: PrefixPolicy::UsedOnly,
            indent: 4,
        }
    }
}

impl TurtleFormatConfig {
    /// Set the prefix policy
    pub fn with_prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.prefix_policy = policy;
        self
    }
}

/// Format a graph as Turtle
pub fn format_turtle(graph: &Graph, config: &TurtleFormatConfig) -> String {
    let mut graph = graph.clone();
    graph.canonicalize();

    let mut compactor = Compactor::new(&graph);
    let mut body = String::new();

    for (subject, triples) in graph.group_by_subject() {
        if !body.is_empty() {
            body.push('\n');
        }
        write_subject_block(&mut body, subject, triples, &mut compactor, config.indent);
    }

    let mut out = String::new();
    for (prefix, namespace) in &graph.prefixes {
        let used = compactor.used.contains(prefix.as_str());
        if used || config.prefix_policy == PrefixPolicy::All {
            out.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
        }
    }
    if !out.is_empty() && !body.is_empty() {
        out.push('\n');
    }
    out.push_str(&body);
    out
}

fn write_subject_block(
    out: &mut String,
    subject: &Term,
    triples: &[Triple],
    compactor: &mut Compactor<'_>,
    indent: usize,
) {
    // rdf:type first, then the remaining predicates in sorted order
    let mut ordered: Vec<&Triple> = triples.iter().filter(|t| is_rdf_type(&t.p)).collect();
    ordered.extend(triples.iter().filter(|t| !is_rdf_type(&t.p)));

    out.push_str(&compactor.term(subject));

    let pad = " ".repeat(indent);
    let mut current: Option<&Term> = None;
    for triple in ordered {
        if current == Some(&triple.p) {
            out.push_str(", ");
        } else {
            if current.is_some() {
                out.push_str(" ;\n");
                out.push_str(&pad);
            } else {
                out.push(' ');
            }
            let predicate = if is_rdf_type(&triple.p) {
                "a".to_string()
            } else {
                compactor.term(&triple.p)
            };
            out.push_str(&predicate);
            out.push(' ');
            current = Some(&triple.p);
        }
        out.push_str(&compactor.term(&triple.o));
    }
    out.push_str(" .\n");
}

fn is_rdf_type(term: &Term) -> bool {
    term.as_iri() == Some(rdf::TYPE)
}

/// Compacts IRIs against the graph's prefix map and records which prefixes
/// were used.
struct Compactor<'a> {
    /// (prefix, namespace), longest namespace first
    bindings: Vec<(&'a str, &'a str)>,
    used: BTreeSet<&'a str>,
}

impl<'a> Compactor<'a> {
    fn new(graph: &'a Graph) -> Self {
        let mut bindings: Vec<(&str, &str)> = graph
            .prefixes
            .iter()
            .map(|(p, ns)| (p.as_str(), ns.as_str()))
            .collect();
        bindings.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(b.0)));
        Self {
            bindings,
            used: BTreeSet::new(),
        }
    }

    fn iri(&mut self, iri: &str) -> String {
        for &(prefix, namespace) in &self.bindings {
            if let Some(local) = iri.strip_prefix(namespace) {
                if is_pn_local(local) {
                    self.used.insert(prefix);
                    return format!("{prefix}:{local}");
                }
            }
        }
        format!("<{iri}>")
    }

    fn term(&mut self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.iri(iri),
            Term::Literal { value, datatype } => {
                let lexical = value.lexical();
                match (datatype.as_iri(), value) {
                    (xsd::STRING, _) => format!("\"{}\"", escape_literal(&lexical)),
                    (xsd::INTEGER, LiteralValue::Integer(i)) => i.to_string(),
                    (xsd::BOOLEAN, LiteralValue::Boolean(b)) => b.to_string(),
                    (xsd::DECIMAL, _) if is_decimal_lexical(&lexical) => lexical,
                    (dt, _) => {
                        let dt = self.iri(dt);
                        format!("\"{}\"^^{dt}", escape_literal(&lexical))
                    }
                }
            }
        }
    }
}

/// Conservative PN_LOCAL check: letters, digits, `_` and `-`, never empty
fn is_pn_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Turtle's bare DECIMAL production: `[+-]? [0-9]* '.' [0-9]+`
fn is_decimal_lexical(lexical: &str) -> bool {
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    match digits.split_once('.') {
        Some((int, frac)) => {
            int.chars().all(|c| c.is_ascii_digit())
                && !frac.is_empty()
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use specimen_graph_ir::Datatype;

    const CCF: &str = "http://purl.org/ccf/";

    fn ccf(local: &str) -> Term {
        Term::iri(format!("{CCF}{local}"))
    }

    fn block_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_prefix("ccf", CCF);
        graph.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        graph.add_prefix("dcterms", "http://purl.org/dc/terms/");

        let block = Term::iri("https://entity.api.hubmapconsortium.org/entities/B1");
        graph.add_triple(block.clone(), ccf("section_count"), Term::integer(3));
        graph.add_triple(block.clone(), Term::iri(rdf::TYPE), ccf("tissue_block"));
        graph.add_triple(
            block.clone(),
            Term::iri(rdf::TYPE),
            Term::iri("http://www.w3.org/2002/07/owl#NamedIndividual"),
        );
        graph.add_triple(block, ccf("section_size_unit"), Term::string("micrometer"));
        graph
    }

    #[test]
    fn test_subject_block_layout() {
        let ttl = format_turtle(&block_graph(), &TurtleFormatConfig::default());
        assert_eq!(
            ttl,
            "@prefix ccf: <http://purl.org/ccf/> .\n\
             @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             \n\
             <https://entity.api.hubmapconsortium.org/entities/B1> a ccf:tissue_block, owl:NamedIndividual ;\n    \
             ccf:section_count 3 ;\n    \
             ccf:section_size_unit \"micrometer\" .\n"
        );
    }

    #[test]
    fn test_prefix_policy_all() {
        let config = TurtleFormatConfig::default().with_prefix_policy(PrefixPolicy::All);
        let ttl = format_turtle(&block_graph(), &config);
        assert!(ttl.contains("@prefix dcterms: <http://purl.org/dc/terms/> ."));
    }

    #[test]
    fn test_literal_rendering() {
        let mut graph = Graph::new();
        graph.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        let s = Term::iri("http://ex/d");
        graph.add_triple(s.clone(), ccf("bmi"), Term::decimal("22.70"));
        graph.add_triple(s.clone(), ccf("age"), Term::integer(-4));
        graph.add_triple(s.clone(), ccf("flag"), Term::boolean(true));
        graph.add_triple(s.clone(), ccf("weird"), Term::decimal("1e5"));
        graph.add_triple(s.clone(), ccf("note"), Term::string("line1\n\"q\""));
        graph.add_triple(
            s,
            ccf("born"),
            Term::typed("2001-02-03", Datatype::xsd_date()),
        );

        let ttl = format_turtle(&graph, &TurtleFormatConfig::default());
        assert!(ttl.contains(" 22.70"));
        assert!(ttl.contains(" -4"));
        assert!(ttl.contains(" true"));
        assert!(ttl.contains("\"1e5\"^^xsd:decimal"));
        assert!(ttl.contains("\"line1\\n\\\"q\\\"\""));
        assert!(ttl.contains("\"2001-02-03\"^^xsd:date"));
        assert!(ttl.starts_with("@prefix xsd:"));
    }

    #[test]
    fn test_iri_not_compacted_when_local_invalid() {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://ex/");
        graph.add(Triple::iris("http://ex/a/b", "http://ex/p", "http://ex/"));

        let ttl = format_turtle(&graph, &TurtleFormatConfig::default());
        assert_eq!(ttl, "@prefix ex: <http://ex/> .\n\n<http://ex/a/b> ex:p <http://ex/> .\n");
    }

    #[test]
    fn test_longest_namespace_wins() {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://ex/");
        graph.add_prefix("exv", "http://ex/vocab/");
        graph.add(Triple::iris("http://ex/s", "http://ex/vocab/p", "http://ex/o"));

        let ttl = format_turtle(&graph, &TurtleFormatConfig::default());
        assert!(ttl.contains("ex:s exv:p ex:o ."));
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::new();
        graph.add_prefix("ccf", CCF);
        assert_eq!(format_turtle(&graph, &TurtleFormatConfig::default()), "");
    }

    #[test]
    fn test_is_decimal_lexical() {
        assert!(is_decimal_lexical("1.5"));
        assert!(is_decimal_lexical("-.5"));
        assert!(is_decimal_lexical("+10.25"));
        assert!(!is_decimal_lexical("10"));
        assert!(!is_decimal_lexical("1."));
        assert!(!is_decimal_lexical("1.2.3"));
        assert!(!is_decimal_lexical("abc"));
    }
}
