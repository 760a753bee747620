//! Specimen hierarchy to graph statements
//!
//! The walk is depth-first and pre-order. Each document is decoded in full
//! (see [`crate::model`]), its statements are built into a scratch
//! [`Graph`], and only a document that converts without error is merged
//! into the target store.
//!
//! Recursion context (donor, nearest enclosing tissue block, publisher) is
//! passed explicitly in [`Context`]; the transformer itself carries nothing
//! between documents beyond its vocabulary.

use crate::error::{Result, TransformError};
use crate::model::{
    decode_record, top_level_objects, BiologicalSex, Dataset, Descriptive, Donor, Record, Sample,
    TissueBlock, TissueSection,
};
use crate::store::GraphStore;
use serde_json::Value as JsonValue;
use specimen_graph_ir::{Graph, Term, Triple};
use specimen_vocab::{owl, rdf, Vocabulary};

/// Converts specimen documents into CCF statements
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    vocab: Vocabulary,
}

impl Transformer {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Transform one document and merge its statements into `store`
    ///
    /// Returns the number of statements that were new to the store. On error
    /// the store is left unchanged.
    pub fn transform(&self, document: &JsonValue, store: &mut GraphStore) -> Result<usize> {
        let graph = self.statements(document)?;
        let emitted = graph.len();
        let added = store.merge(graph);
        tracing::info!(emitted, added, total = store.len(), "merged document statements");
        Ok(added)
    }

    /// Build the statements for one document without touching any store
    pub fn statements(&self, document: &JsonValue) -> Result<Graph> {
        let objects = top_level_objects(document)?;
        let span = tracing::info_span!("transform_document", object_count = objects.len());
        let _guard = span.enter();

        let mut emitter = Emitter::new(&self.vocab);
        for object in objects {
            match decode_record(object)? {
                Record::Donor(donor) => emitter.donor(&donor)?,
            }
        }

        let mut graph = emitter.finish();
        graph.canonicalize();
        tracing::debug!(statement_count = graph.len(), "document converted");
        Ok(graph)
    }
}

/// State threaded down the recursion
#[derive(Clone, Copy, Debug)]
struct Context<'a> {
    donor: &'a str,
    /// Nearest enclosing tissue block
    block: Option<&'a str>,
    /// Consortium name of the owning donor
    publisher: Option<&'a str>,
}

impl<'a> Context<'a> {
    fn within_block(self, block: &'a str) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

/// Appends statements for one document into a scratch graph
struct Emitter<'v> {
    vocab: &'v Vocabulary,
    graph: Graph,
}

impl<'v> Emitter<'v> {
    fn new(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            graph: Graph::new(),
        }
    }

    fn finish(self) -> Graph {
        self.graph
    }

    fn add(&mut self, subject: &str, predicate: &str, object: Term) {
        self.graph
            .add(Triple::new(Term::iri(subject), Term::iri(predicate), object));
    }

    fn link(&mut self, subject: &str, predicate: &str, object: &str) {
        self.graph.add(Triple::iris(subject, predicate, object));
    }

    fn string(&mut self, subject: &str, predicate: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.add(subject, predicate, Term::string(value));
        }
    }

    fn integer(&mut self, subject: &str, predicate: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.add(subject, predicate, Term::integer(value));
        }
    }

    /// `rdf:type` the class plus `owl:NamedIndividual`
    fn individual(&mut self, subject: &str, class: &str) {
        self.link(subject, rdf::TYPE, owl::NAMED_INDIVIDUAL);
        self.link(subject, rdf::TYPE, class);
    }

    fn descriptive(&mut self, subject: &str, text: &Descriptive) {
        let vocab = self.vocab;
        self.string(subject, &vocab.description, text.label.as_deref());
        self.string(subject, &vocab.comment, text.description.as_deref());
        self.string(subject, &vocab.url, text.link.as_deref());
    }

    fn publisher(&mut self, subject: &str, ctx: Context<'_>) {
        let vocab = self.vocab;
        self.string(subject, &vocab.publisher, ctx.publisher);
    }

    fn donor(&mut self, donor: &Donor) -> Result<()> {
        let vocab = self.vocab;
        let id = donor.id.as_str();
        tracing::debug!(donor = id, samples = donor.samples.len(), "donor");

        self.individual(id, &vocab.donor);
        self.descriptive(id, &donor.text);
        self.integer(id, &vocab.age, donor.age);
        if let Some(sex) = donor.sex {
            let concept = match sex {
                BiologicalSex::Male => &vocab.male,
                BiologicalSex::Female => &vocab.female,
            };
            self.link(id, &vocab.has_biological_sex, concept);
        }
        if let Some(bmi) = &donor.bmi {
            self.add(id, &vocab.bmi, Term::decimal(bmi));
        }
        self.string(id, &vocab.consortium_name, donor.consortium_name.as_deref());
        self.string(id, &vocab.tissue_provider_name, donor.provider_name.as_deref());
        self.string(id, &vocab.tissue_provider_uuid, donor.provider_uuid.as_deref());

        let ctx = Context {
            donor: id,
            block: None,
            publisher: donor.consortium_name.as_deref(),
        };
        self.publisher(id, ctx);
        self.samples(&donor.samples, ctx)
    }

    fn samples(&mut self, samples: &[Sample], ctx: Context<'_>) -> Result<()> {
        for sample in samples {
            match sample {
                Sample::TissueBlock(block) => self.tissue_block(block, ctx)?,
                Sample::TissueSection(section) => self.tissue_section(section, ctx)?,
            }
        }
        Ok(())
    }

    /// Class, text, publisher and the paired donation edges shared by every
    /// sample kind
    fn sample_common(&mut self, id: &str, class: &str, text: &Descriptive, ctx: Context<'_>) {
        let vocab = self.vocab;
        self.individual(id, class);
        self.link(ctx.donor, &vocab.provides, id);
        self.link(id, &vocab.comes_from, ctx.donor);
        self.descriptive(id, text);
        self.publisher(id, ctx);
    }

    fn tissue_block(&mut self, block: &TissueBlock, ctx: Context<'_>) -> Result<()> {
        let vocab = self.vocab;
        let id = block.id.as_str();
        tracing::debug!(
            block = id,
            sections = block.sections.len(),
            datasets = block.datasets.len(),
            "tissue block"
        );

        self.sample_common(id, &vocab.tissue_block, &block.text, ctx);
        self.link(id, &vocab.has_registration_location, &block.rui_location);
        self.integer(id, &vocab.section_count, block.section_count);
        self.integer(id, &vocab.section_size, block.section_size);
        self.string(id, &vocab.section_size_unit, block.section_units.as_deref());

        self.samples(&block.sections, ctx.within_block(id))?;
        self.datasets(id, &block.datasets, ctx);
        Ok(())
    }

    fn tissue_section(&mut self, section: &TissueSection, ctx: Context<'_>) -> Result<()> {
        let vocab = self.vocab;
        let id = section.id.as_str();
        let block = ctx
            .block
            .ok_or_else(|| TransformError::MissingTissueBlock(section.id.clone()))?;
        tracing::debug!(section = id, block, "tissue section");

        self.sample_common(id, &vocab.tissue_section, &section.text, ctx);
        self.link(block, &vocab.subdivided_into_sections, id);
        self.link(id, &vocab.part_of_tissue_block, block);
        self.integer(id, &vocab.section_number, Some(section.section_number));

        self.samples(&section.samples, ctx)?;
        self.datasets(id, &section.datasets, ctx);
        Ok(())
    }

    fn datasets(&mut self, owner: &str, datasets: &[Dataset], ctx: Context<'_>) {
        let vocab = self.vocab;
        for dataset in datasets {
            let id = dataset.id.as_str();
            tracing::debug!(dataset = id, sample = owner, "dataset");

            self.individual(id, &vocab.dataset);
            self.link(owner, &vocab.generates_dataset, id);
            self.descriptive(id, &dataset.text);
            self.string(id, &vocab.technology, dataset.technology.as_deref());
            self.string(id, &vocab.thumbnail, dataset.thumbnail.as_deref());
            self.publisher(id, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transformer() -> Transformer {
        Transformer::new(Vocabulary::ccf())
    }

    fn has(graph: &Graph, s: &str, p: &str, o: Term) -> bool {
        graph.contains(&Triple::new(Term::iri(s), Term::iri(p), o))
    }

    #[test]
    fn test_donor_only() {
        let t = transformer();
        let v = t.vocabulary();
        let graph = t
            .statements(&json!({
                "@type": "Donor",
                "@id": "http://ex/D1",
                "label": "Donor 1",
                "age": 0,
                "sex": "Male",
                "consortium_name": "ConsortiumX"
            }))
            .unwrap();

        assert!(has(&graph, "http://ex/D1", rdf::TYPE, Term::iri(&v.donor)));
        assert!(has(&graph, "http://ex/D1", rdf::TYPE, Term::iri(owl::NAMED_INDIVIDUAL)));
        assert!(has(&graph, "http://ex/D1", &v.description, Term::string("Donor 1")));
        assert!(has(&graph, "http://ex/D1", &v.age, Term::integer(0)));
        assert!(has(&graph, "http://ex/D1", &v.has_biological_sex, Term::iri(&v.male)));
        assert!(has(&graph, "http://ex/D1", &v.publisher, Term::string("ConsortiumX")));
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn test_no_publisher_without_consortium() {
        let t = transformer();
        let graph = t
            .statements(&json!({
                "@type": "Donor",
                "@id": "http://ex/D1",
                "samples": [{
                    "@id": "http://ex/B1",
                    "sample_type": "Tissue Block",
                    "rui_location": "http://ex/R1"
                }]
            }))
            .unwrap();
        let publisher = t.vocabulary().publisher.as_str();
        assert!(graph.iter().all(|tr| tr.p.as_iri() != Some(publisher)));
    }

    #[test]
    fn test_section_nested_in_section_keeps_block() {
        let t = transformer();
        let v = t.vocabulary();
        let graph = t
            .statements(&json!({
                "@type": "Donor",
                "@id": "http://ex/D1",
                "samples": [{
                    "@id": "http://ex/B1",
                    "sample_type": "Tissue Block",
                    "rui_location": {"@id": "http://ex/R1"},
                    "sections": [{
                        "@id": "http://ex/S1",
                        "sample_type": "Tissue Section",
                        "section_number": 1,
                        "samples": [{
                            "@id": "http://ex/S1a",
                            "sample_type": "Tissue Section",
                            "section_number": 2
                        }]
                    }]
                }]
            }))
            .unwrap();

        assert!(has(&graph, "http://ex/S1a", &v.part_of_tissue_block, Term::iri("http://ex/B1")));
        assert!(has(&graph, "http://ex/B1", &v.subdivided_into_sections, Term::iri("http://ex/S1a")));
        assert!(!has(&graph, "http://ex/S1a", &v.part_of_tissue_block, Term::iri("http://ex/S1")));
        assert!(has(&graph, "http://ex/D1", &v.provides, Term::iri("http://ex/S1a")));
    }

    #[test]
    fn test_section_without_block_fails() {
        let err = transformer()
            .statements(&json!({
                "@type": "Donor",
                "@id": "http://ex/D1",
                "samples": [{
                    "@id": "http://ex/S1",
                    "sample_type": "Tissue Section",
                    "section_number": 1
                }]
            }))
            .unwrap_err();
        assert_eq!(err, TransformError::MissingTissueBlock("http://ex/S1".into()));
        assert!(err.is_structural());
    }

    #[test]
    fn test_failed_document_leaves_store_unchanged() {
        let t = transformer();
        let mut store = GraphStore::create("http://ex/ontology", t.vocabulary());
        let before = store.clone();

        let doc = json!({"@graph": [
            {"@type": "Donor", "@id": "http://ex/D1", "label": "ok"},
            {"@type": "Organ", "@id": "http://ex/O1"}
        ]});
        assert!(t.transform(&doc, &mut store).is_err());
        assert_eq!(store, before);
    }
}
