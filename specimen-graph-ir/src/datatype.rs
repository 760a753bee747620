//! Literal datatypes
//!
//! Every literal carries one; there is no untyped literal. Plain strings
//! are `xsd:string`.

use specimen_vocab::xsd;
use std::fmt;
use std::sync::Arc;

/// Expanded datatype IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datatype(Arc<str>);

impl Datatype {
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    pub fn xsd_string() -> Self {
        Self::from_iri(xsd::STRING)
    }

    pub fn xsd_boolean() -> Self {
        Self::from_iri(xsd::BOOLEAN)
    }

    pub fn xsd_integer() -> Self {
        Self::from_iri(xsd::INTEGER)
    }

    pub fn xsd_decimal() -> Self {
        Self::from_iri(xsd::DECIMAL)
    }

    pub fn xsd_date() -> Self {
        Self::from_iri(xsd::DATE)
    }

    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Plain string literals omit the datatype when written
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == xsd::STRING
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xsd_datatypes() {
        assert_eq!(Datatype::xsd_integer().as_iri(), xsd::INTEGER);
        assert_eq!(Datatype::xsd_decimal().to_string(), xsd::DECIMAL);
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_date().is_xsd_string());
    }

    #[test]
    fn test_from_iri_matches_builtin() {
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#decimal"),
            Datatype::xsd_decimal()
        );
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }
}
