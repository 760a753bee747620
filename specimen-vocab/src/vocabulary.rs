//! The vocabulary table handed to the transformer
//!
//! Holds expanded IRIs for every class, predicate and concept the specimen
//! mapping emits. All CCF terms share one namespace; the remaining terms
//! (rdf, owl, dcterms, LOINC) are fixed.

use crate::{ccf, dc, dcterms, lnc, owl, rdf, rdfs, xsd};

/// Expanded IRIs for every term used by the specimen mapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    /// Namespace the CCF terms were built from (ends with `/` or `#`)
    pub namespace: String,

    // Classes
    pub donor: String,
    pub tissue_block: String,
    pub tissue_section: String,
    pub dataset: String,

    // Relational (object) properties
    pub provides: String,
    pub comes_from: String,
    pub has_biological_sex: String,
    pub has_registration_location: String,
    pub subdivided_into_sections: String,
    pub part_of_tissue_block: String,
    pub generates_dataset: String,

    // Annotation properties
    pub description: String,
    pub url: String,
    pub age: String,
    pub bmi: String,
    pub consortium_name: String,
    pub tissue_provider_name: String,
    pub tissue_provider_uuid: String,
    pub section_count: String,
    pub section_size: String,
    pub section_size_unit: String,
    pub section_number: String,
    pub technology: String,
    pub thumbnail: String,

    /// Provenance predicate carrying the publishing consortium
    pub publisher: String,
    /// Predicate carrying an entity's free-text description
    pub comment: String,

    // Biological sex concepts
    pub male: String,
    pub female: String,
}

impl Vocabulary {
    /// The standard CCF vocabulary (`http://purl.org/ccf/`)
    pub fn ccf() -> Self {
        Self::with_namespace(ccf::NS)
    }

    /// Build the vocabulary with every CCF term under `namespace`
    ///
    /// The namespace is used verbatim as a prefix, so it should end in a
    /// separator (`/` or `#`).
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let term = |local: &str| format!("{namespace}{local}");

        Self {
            donor: term(ccf::DONOR),
            tissue_block: term(ccf::TISSUE_BLOCK),
            tissue_section: term(ccf::TISSUE_SECTION),
            dataset: term(ccf::DATASET),

            provides: term(ccf::PROVIDES),
            comes_from: term(ccf::COMES_FROM),
            has_biological_sex: term(ccf::HAS_BIOLOGICAL_SEX),
            has_registration_location: term(ccf::HAS_REGISTRATION_LOCATION),
            subdivided_into_sections: term(ccf::SUBDIVIDED_INTO_SECTIONS),
            part_of_tissue_block: term(ccf::PART_OF_TISSUE_BLOCK),
            generates_dataset: term(ccf::GENERATES_DATASET),

            description: term(ccf::DESCRIPTION),
            url: term(ccf::URL),
            age: term(ccf::AGE),
            bmi: term(ccf::BMI),
            consortium_name: term(ccf::CONSORTIUM_NAME),
            tissue_provider_name: term(ccf::TISSUE_PROVIDER_NAME),
            tissue_provider_uuid: term(ccf::TISSUE_PROVIDER_UUID),
            section_count: term(ccf::SECTION_COUNT),
            section_size: term(ccf::SECTION_SIZE),
            section_size_unit: term(ccf::SECTION_SIZE_UNIT),
            section_number: term(ccf::SECTION_NUMBER),
            technology: term(ccf::TECHNOLOGY),
            thumbnail: term(ccf::THUMBNAIL),

            publisher: dcterms::PUBLISHER.to_string(),
            comment: rdfs::COMMENT.to_string(),

            male: lnc::MALE.to_string(),
            female: lnc::FEMALE.to_string(),

            namespace,
        }
    }

    /// Relational predicates declared as `owl:ObjectProperty` in every store
    pub fn object_properties(&self) -> [&str; 7] {
        [
            self.has_biological_sex.as_str(),
            self.provides.as_str(),
            self.comes_from.as_str(),
            self.subdivided_into_sections.as_str(),
            self.part_of_tissue_block.as_str(),
            self.generates_dataset.as_str(),
            self.has_registration_location.as_str(),
        ]
    }

    /// Prefix bindings for serializers, in declaration order
    pub fn prefixes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ccf", self.namespace.clone()),
            ("owl", owl::NS.to_string()),
            ("dc", dc::NS.to_string()),
            ("dcterms", dcterms::NS.to_string()),
            ("rdf", rdf::NS.to_string()),
            ("rdfs", rdfs::NS.to_string()),
            ("xsd", xsd::NS.to_string()),
        ]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::ccf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccf_defaults() {
        let vocab = Vocabulary::ccf();
        assert_eq!(vocab.namespace, "http://purl.org/ccf/");
        assert_eq!(vocab.provides, "http://purl.org/ccf/provides");
        assert_eq!(vocab.tissue_section, "http://purl.org/ccf/tissue_section");
        assert_eq!(vocab.publisher, "http://purl.org/dc/terms/publisher");
        assert_eq!(vocab.female, lnc::FEMALE);
    }

    #[test]
    fn test_custom_namespace() {
        let vocab = Vocabulary::with_namespace("https://example.org/ccf#");
        assert_eq!(vocab.donor, "https://example.org/ccf#donor");
        assert_eq!(vocab.comes_from, "https://example.org/ccf#comes_from");
        // Non-CCF terms are unaffected
        assert_eq!(vocab.comment, rdfs::COMMENT);
        assert_eq!(vocab.male, lnc::MALE);
    }

    #[test]
    fn test_object_properties_are_distinct() {
        let vocab = Vocabulary::ccf();
        let mut props = vocab.object_properties().to_vec();
        props.sort();
        props.dedup();
        assert_eq!(props.len(), 7);
        assert!(props.iter().all(|p| p.starts_with(ccf::NS)));
    }

    #[test]
    fn test_prefixes_bind_namespace() {
        let vocab = Vocabulary::with_namespace("https://example.org/ccf#");
        let prefixes = vocab.prefixes();
        assert_eq!(prefixes[0], ("ccf", "https://example.org/ccf#".to_string()));
        assert!(prefixes.iter().any(|(p, ns)| *p == "xsd" && ns == xsd::NS));
    }
}
