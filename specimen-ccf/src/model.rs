//! Typed specimen records decoded from JSON
//!
//! Input documents are loosely shaped JSON. This module decodes them into
//! closed types before any statement is emitted:
//!
//! - optional fields become `Option<T>`; a key that is absent or `null` is
//!   `None`, any other value (including `0` and `""`) is `Some`
//! - required fields (`@id`, `sample_type`, `rui_location`,
//!   `section_number`) fail with [`TransformError::MissingField`]
//! - type tags decode into [`ObjectType`] / [`SampleType`]; unknown tags are
//!   structural errors
//! - child collections (`samples`, `sections`, `datasets`) default to empty

use crate::error::{Result, TransformError};
use serde_json::{Map, Value as JsonValue};

/// Recognized top-level `@type` tags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectType {
    Donor,
}

impl ObjectType {
    /// Decode a top-level `@type` value
    pub fn parse(id: &str, tag: &str) -> Result<Self> {
        match tag {
            "Donor" => Ok(ObjectType::Donor),
            other => Err(TransformError::UnsupportedType {
                id: id.to_string(),
                object_type: other.to_string(),
            }),
        }
    }
}

/// Recognized `sample_type` tags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleType {
    TissueBlock,
    TissueSection,
}

impl SampleType {
    /// Decode a `sample_type` value
    pub fn parse(id: &str, tag: &str) -> Result<Self> {
        match tag {
            "Tissue Block" => Ok(SampleType::TissueBlock),
            "Tissue Section" => Ok(SampleType::TissueSection),
            other => Err(TransformError::UnknownSampleType {
                id: id.to_string(),
                sample_type: other.to_string(),
            }),
        }
    }
}

/// Donor biological sex
///
/// Only the two values with a concept mapping are represented; any other
/// input value decodes to `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(BiologicalSex::Male),
            "Female" => Some(BiologicalSex::Female),
            _ => None,
        }
    }
}

/// Text shared by every entity kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Descriptive {
    pub label: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// A donor and everything it provides
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Donor {
    pub id: String,
    pub text: Descriptive,
    pub age: Option<i64>,
    pub sex: Option<BiologicalSex>,
    /// Lexical xsd:decimal form
    pub bmi: Option<String>,
    pub consortium_name: Option<String>,
    pub provider_name: Option<String>,
    pub provider_uuid: Option<String>,
    pub samples: Vec<Sample>,
}

/// A sample, discriminated by `sample_type`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sample {
    TissueBlock(TissueBlock),
    TissueSection(TissueSection),
}

impl Sample {
    pub fn id(&self) -> &str {
        match self {
            Sample::TissueBlock(block) => &block.id,
            Sample::TissueSection(section) => &section.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TissueBlock {
    pub id: String,
    /// IRI of the spatial entity the block is registered to
    pub rui_location: String,
    pub text: Descriptive,
    pub section_count: Option<i64>,
    pub section_size: Option<i64>,
    pub section_units: Option<String>,
    pub sections: Vec<Sample>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TissueSection {
    pub id: String,
    pub section_number: i64,
    pub text: Descriptive,
    pub samples: Vec<Sample>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub id: String,
    pub text: Descriptive,
    pub technology: Option<String>,
    pub thumbnail: Option<String>,
}

/// A decoded top-level object
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Donor(Donor),
}

/// Split a document into its top-level objects
///
/// Accepts a single object, an array of objects, or an object whose
/// `@graph` holds an array of objects.
pub fn top_level_objects(document: &JsonValue) -> Result<Vec<&JsonValue>> {
    match document {
        JsonValue::Array(items) => Ok(items.iter().collect()),
        JsonValue::Object(map) => match map.get("@graph") {
            Some(JsonValue::Array(items)) => Ok(items.iter().collect()),
            Some(_) => Err(TransformError::InvalidDocument(
                "@graph must be an array of objects".to_string(),
            )),
            None => Ok(vec![document]),
        },
        _ => Err(TransformError::InvalidDocument(
            "expected an object, an array, or an @graph envelope".to_string(),
        )),
    }
}

/// Decode one top-level object
pub fn decode_record(value: &JsonValue) -> Result<Record> {
    let map = value.as_object().ok_or_else(|| {
        TransformError::InvalidDocument("top-level entries must be objects".to_string())
    })?;
    let id_hint = map
        .get("@id")
        .and_then(JsonValue::as_str)
        .unwrap_or("(no @id)");

    let tag = match map.get("@type") {
        None | Some(JsonValue::Null) => {
            return Err(TransformError::MissingType(id_hint.to_string()))
        }
        Some(JsonValue::String(tag)) => tag.as_str(),
        Some(_) => {
            return Err(TransformError::InvalidField {
                entity: format!("object {id_hint}"),
                field: "@type",
                expected: "a string",
            })
        }
    };

    match ObjectType::parse(id_hint, tag)? {
        ObjectType::Donor => decode_donor(map).map(Record::Donor),
    }
}

fn decode_donor(map: &Map<String, JsonValue>) -> Result<Donor> {
    let fields = Fields::new("donor", map)?;
    Ok(Donor {
        text: fields.descriptive()?,
        age: fields.integer("age")?,
        sex: fields
            .string("sex")?
            .as_deref()
            .and_then(BiologicalSex::from_label),
        bmi: fields.decimal("bmi")?,
        consortium_name: fields.string("consortium_name")?,
        provider_name: fields.string("provider_name")?,
        provider_uuid: fields.string("provider_uuid")?,
        samples: decode_samples(&fields, "samples")?,
        id: fields.id,
    })
}

fn decode_samples(parent: &Fields<'_>, key: &'static str) -> Result<Vec<Sample>> {
    parent
        .list(key)?
        .iter()
        .map(|value| {
            let map = value.as_object().ok_or_else(|| parent.invalid(key, "an array of objects"))?;
            decode_sample(map)
        })
        .collect()
}

fn decode_sample(map: &Map<String, JsonValue>) -> Result<Sample> {
    let fields = Fields::new("sample", map)?;
    let tag = fields
        .string("sample_type")?
        .ok_or_else(|| fields.missing("sample_type"))?;

    match SampleType::parse(&fields.id, &tag)? {
        SampleType::TissueBlock => {
            let fields = fields.renamed("tissue block");
            Ok(Sample::TissueBlock(TissueBlock {
                rui_location: fields.reference("rui_location")?,
                text: fields.descriptive()?,
                section_count: fields.integer("section_count")?,
                section_size: fields.integer("section_size")?,
                section_units: fields.string("section_units")?,
                sections: decode_samples(&fields, "sections")?,
                datasets: decode_datasets(&fields)?,
                id: fields.id,
            }))
        }
        SampleType::TissueSection => {
            let fields = fields.renamed("tissue section");
            Ok(Sample::TissueSection(TissueSection {
                section_number: fields
                    .integer("section_number")?
                    .ok_or_else(|| fields.missing("section_number"))?,
                text: fields.descriptive()?,
                samples: decode_samples(&fields, "samples")?,
                datasets: decode_datasets(&fields)?,
                id: fields.id,
            }))
        }
    }
}

fn decode_datasets(parent: &Fields<'_>) -> Result<Vec<Dataset>> {
    parent
        .list("datasets")?
        .iter()
        .map(|value| {
            let map = value
                .as_object()
                .ok_or_else(|| parent.invalid("datasets", "an array of objects"))?;
            let fields = Fields::new("dataset", map)?;
            Ok(Dataset {
                text: fields.descriptive()?,
                technology: fields.string("technology")?,
                thumbnail: fields.string("thumbnail")?,
                id: fields.id,
            })
        })
        .collect()
}

/// Field accessor over one JSON object, naming the entity in errors
struct Fields<'a> {
    kind: &'static str,
    id: String,
    map: &'a Map<String, JsonValue>,
}

impl<'a> Fields<'a> {
    /// Wrap an object, reading its required `@id`
    fn new(kind: &'static str, map: &'a Map<String, JsonValue>) -> Result<Self> {
        let id = match map.get("@id") {
            Some(JsonValue::String(id)) if !id.is_empty() => id.clone(),
            None | Some(JsonValue::Null) => {
                return Err(TransformError::MissingField {
                    entity: kind.to_string(),
                    field: "@id",
                })
            }
            Some(_) => {
                return Err(TransformError::InvalidField {
                    entity: kind.to_string(),
                    field: "@id",
                    expected: "a non-empty IRI string",
                })
            }
        };
        Ok(Self { kind, id, map })
    }

    fn renamed(self, kind: &'static str) -> Self {
        Self { kind, ..self }
    }

    fn entity(&self) -> String {
        format!("{} {}", self.kind, self.id)
    }

    fn missing(&self, field: &'static str) -> TransformError {
        TransformError::MissingField {
            entity: self.entity(),
            field,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> TransformError {
        TransformError::InvalidField {
            entity: self.entity(),
            field,
            expected,
        }
    }

    /// Present, non-null value
    fn get(&self, key: &str) -> Option<&'a JsonValue> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn descriptive(&self) -> Result<Descriptive> {
        Ok(Descriptive {
            label: self.string("label")?,
            description: self.string("description")?,
            link: self.string("link")?,
        })
    }

    /// Text value; numbers and booleans are taken by their JSON rendering
    fn string(&self, key: &'static str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.clone())),
            Some(v @ (JsonValue::Number(_) | JsonValue::Bool(_))) => Ok(Some(v.to_string())),
            Some(_) => Err(self.invalid(key, "a string")),
        }
    }

    /// Integer value, from a JSON integer or an integer string
    fn integer(&self, key: &'static str) -> Result<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(JsonValue::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "an integer")),
            Some(JsonValue::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.invalid(key, "an integer")),
            Some(_) => Err(self.invalid(key, "an integer")),
        }
    }

    /// Decimal value as its lexical form
    fn decimal(&self, key: &'static str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(JsonValue::Number(n)) if n.as_f64().is_some_and(f64::is_finite) => {
                Ok(Some(n.to_string()))
            }
            Some(JsonValue::String(s)) if is_decimal_lexical(s.trim()) => {
                Ok(Some(s.trim().to_string()))
            }
            Some(_) => Err(self.invalid(key, "a decimal number")),
        }
    }

    /// Required reference: `{"@id": "..."}` or a bare IRI string
    fn reference(&self, key: &'static str) -> Result<String> {
        match self.get(key) {
            None => Err(self.missing(key)),
            Some(JsonValue::String(iri)) if !iri.is_empty() => Ok(iri.clone()),
            Some(JsonValue::Object(obj)) => match obj.get("@id") {
                Some(JsonValue::String(iri)) if !iri.is_empty() => Ok(iri.clone()),
                None | Some(JsonValue::Null) => Err(TransformError::MissingField {
                    entity: format!("{} of {}", key, self.entity()),
                    field: "@id",
                }),
                Some(_) => Err(self.invalid(key, "an object with an @id IRI")),
            },
            Some(_) => Err(self.invalid(key, "an object with an @id IRI")),
        }
    }

    /// Child collection; absent means empty
    fn list(&self, key: &'static str) -> Result<&'a [JsonValue]> {
        match self.get(key) {
            None => Ok(&[]),
            Some(JsonValue::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(key, "an array of objects")),
        }
    }
}

/// `[+-]? digits ('.' digits)?`, or `[+-]? '.' digits`
fn is_decimal_lexical(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int, frac) = match body.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (body, None),
    };
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    match frac {
        Some(frac) => digits(int) && !frac.is_empty() && digits(frac),
        None => !int.is_empty() && digits(int),
    }
}
