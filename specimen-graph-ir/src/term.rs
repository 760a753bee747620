//! Terms: expanded IRIs and typed literals
//!
//! Specimen graphs never contain blank nodes since every entity carries an
//! `@id`, so a term is either an IRI reference or a literal.

use crate::Datatype;
use std::fmt;
use std::sync::Arc;

/// Literal payload
///
/// Decimals keep their lexical form in `Lexical` so that values such as
/// `22.70` are written back unchanged; the datatype tells them apart from
/// strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralValue {
    Lexical(Arc<str>),
    Boolean(bool),
    Integer(i64),
}

impl LiteralValue {
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::Lexical(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::Lexical(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// Subject, predicate or object of a statement
///
/// IRIs are always stored expanded; compaction to prefixed names happens in
/// the formatters. Ordering puts every IRI before every literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Iri(Arc<str>),
    Literal {
        value: LiteralValue,
        datatype: Datatype,
    },
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// `xsd:string` literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_string())
    }

    pub fn boolean(value: bool) -> Self {
        Term::Literal {
            value: LiteralValue::Boolean(value),
            datatype: Datatype::xsd_boolean(),
        }
    }

    pub fn integer(value: i64) -> Self {
        Term::Literal {
            value: LiteralValue::Integer(value),
            datatype: Datatype::xsd_integer(),
        }
    }

    /// `xsd:decimal` literal from its lexical form
    pub fn decimal(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, Datatype::xsd_decimal())
    }

    /// Literal of any datatype, kept as its lexical form
    pub fn typed(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            value: LiteralValue::Lexical(Arc::from(lexical.as_ref())),
            datatype,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }

    pub fn as_literal(&self) -> Option<(&LiteralValue, &Datatype)> {
        match self {
            Term::Literal { value, datatype } => Some((value, datatype)),
            Term::Iri(_) => None,
        }
    }
}

/// N-Triples rendering
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Literal { value, datatype } if datatype.is_xsd_string() => {
                write!(f, "\"{}\"", escape_literal(&value.lexical()))
            }
            Term::Literal { value, datatype } => {
                write!(f, "\"{}\"^^<{datatype}>", escape_literal(&value.lexical()))
            }
        }
    }
}

/// Escape a lexical form for a double-quoted N-Triples or Turtle string
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
