//! Error types for specimen transformation

use thiserror::Error;

/// Result type for transformation operations
pub type Result<T> = std::result::Result<T, TransformError>;

/// Why a specimen document could not be converted
///
/// Every variant aborts the whole document: nothing from it is merged into
/// the target store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Top-level object declares a type other than `Donor`
    #[error("unsupported top-level type '{object_type}' on {id} (only 'Donor' is recognized)")]
    UnsupportedType { id: String, object_type: String },

    /// Top-level object has no `@type`
    #[error("top-level object {0} does not declare an @type")]
    MissingType(String),

    /// Sample's `sample_type` is not one of the recognized tags
    #[error("unrecognized sample_type '{sample_type}' on sample {id}")]
    UnknownSampleType { id: String, sample_type: String },

    /// Tissue section reached without an enclosing tissue block
    #[error("tissue section {0} has no enclosing tissue block")]
    MissingTissueBlock(String),

    /// Structurally required field is absent (or null)
    #[error("{entity} is missing required field '{field}'")]
    MissingField { entity: String, field: &'static str },

    /// Field is present but its value has the wrong shape
    #[error("{entity} has an invalid '{field}': expected {expected}")]
    InvalidField {
        entity: String,
        field: &'static str,
        expected: &'static str,
    },

    /// Document is not an object, an array, or an `@graph` envelope
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl TransformError {
    /// Violations of the specimen hierarchy rules (type tags, nesting)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TransformError::UnsupportedType { .. }
                | TransformError::MissingType(_)
                | TransformError::UnknownSampleType { .. }
                | TransformError::MissingTissueBlock(_)
                | TransformError::InvalidDocument(_)
        )
    }

    /// Failures dereferencing a field of an otherwise well-formed entity
    pub fn is_field_access(&self) -> bool {
        matches!(
            self,
            TransformError::MissingField { .. } | TransformError::InvalidField { .. }
        )
    }
}
