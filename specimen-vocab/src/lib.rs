//! RDF vocabulary constants and the CCF vocabulary table for specimen2ccf
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! when converting specimen records into CCF graph statements.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `dc` / `dcterms` - Dublin Core elements and terms
//! - `ccf` - Common Coordinate Framework vocabulary (http://purl.org/ccf/)
//! - `lnc` - LOINC answer concepts used for biological sex
//!
//! The [`Vocabulary`] table bundles the terms the transformer needs into a
//! single value so that callers can substitute a different namespace.

mod vocabulary;

pub use vocabulary::Vocabulary;

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace IRI
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:Ontology IRI
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

    /// owl:ObjectProperty IRI
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

    /// owl:NamedIndividual IRI
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
}

/// Dublin Core elements (legacy namespace)
pub mod dc {
    /// DC elements namespace IRI
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
}

/// Dublin Core terms
pub mod dcterms {
    /// DC terms namespace IRI
    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcterms:publisher IRI
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
}

/// Common Coordinate Framework vocabulary local names
///
/// Full IRIs are produced by [`Vocabulary`], which joins these local names
/// onto the configured namespace (default [`ccf::NS`]).
pub mod ccf {
    /// Default CCF namespace IRI
    pub const NS: &str = "http://purl.org/ccf/";

    // Classes
    pub const DONOR: &str = "donor";
    pub const TISSUE_BLOCK: &str = "tissue_block";
    pub const TISSUE_SECTION: &str = "tissue_section";
    pub const DATASET: &str = "dataset";

    // Object properties
    pub const PROVIDES: &str = "provides";
    pub const COMES_FROM: &str = "comes_from";
    pub const HAS_BIOLOGICAL_SEX: &str = "has_biological_sex";
    pub const HAS_REGISTRATION_LOCATION: &str = "has_registration_location";
    pub const SUBDIVIDED_INTO_SECTIONS: &str = "subdivided_into_sections";
    pub const PART_OF_TISSUE_BLOCK: &str = "part_of_tissue_block";
    pub const GENERATES_DATASET: &str = "generates_dataset";

    // Annotation properties
    pub const DESCRIPTION: &str = "description";
    pub const URL: &str = "url";
    pub const AGE: &str = "age";
    pub const BMI: &str = "bmi";
    pub const CONSORTIUM_NAME: &str = "consortium_name";
    pub const TISSUE_PROVIDER_NAME: &str = "tissue_provider_name";
    pub const TISSUE_PROVIDER_UUID: &str = "tissue_provider_uuid";
    pub const SECTION_COUNT: &str = "section_count";
    pub const SECTION_SIZE: &str = "section_size";
    pub const SECTION_SIZE_UNIT: &str = "section_size_unit";
    pub const SECTION_NUMBER: &str = "section_number";
    pub const TECHNOLOGY: &str = "technology";
    pub const THUMBNAIL: &str = "thumbnail";
}

/// LOINC answer concepts
pub mod lnc {
    /// LA2-8 "Male"
    pub const MALE: &str = "http://purl.bioontology.org/ontology/LNC/LA2-8";

    /// LA3-6 "Female"
    pub const FEMALE: &str = "http://purl.bioontology.org/ontology/LNC/LA3-6";
}
