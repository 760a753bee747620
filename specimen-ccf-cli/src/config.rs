//! Config file loading and flag resolution
//!
//! Settings come from `specimen2ccf.toml` (the working directory's copy, or
//! the file named by `--config`) with command-line flags taking precedence.

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use serde::Deserialize;
use specimen_graph_format::OutputFormat;
use specimen_vocab::Vocabulary;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "specimen2ccf.toml";

/// Contents of `specimen2ccf.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ontology_iri: Option<String>,
    pub namespace: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(text: &str) -> CliResult<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Load the config file.
///
/// An explicit `--config` path must exist. Without one, `specimen2ccf.toml`
/// in the working directory is used when present.
pub fn load(config_override: Option<&Path>) -> CliResult<FileConfig> {
    let path = match config_override {
        Some(p) => {
            if !p.is_file() {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let p = PathBuf::from(CONFIG_FILE);
            if !p.is_file() {
                return Ok(FileConfig::default());
            }
            p
        }
    };

    tracing::debug!(path = %path.display(), "loading config file");
    let text = std::fs::read_to_string(&path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    FileConfig::parse(&text).map_err(|e| match e {
        CliError::Config(msg) => CliError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Effective settings for one run
#[derive(Debug)]
pub struct Settings {
    pub ontology_iri: String,
    pub vocab: Vocabulary,
    pub format: OutputFormat,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Merge flags over file values
    pub fn resolve(cli: &Cli, file: FileConfig) -> CliResult<Self> {
        let ontology_iri = cli
            .ontology_iri
            .clone()
            .or(file.ontology_iri)
            .ok_or_else(|| {
                CliError::Usage(
                    "no ontology IRI given; pass --ontology-iri or set ontology_iri in the config file"
                        .to_string(),
                )
            })?;

        let format = match cli.format.as_deref().or(file.format.as_deref()) {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        let vocab = match cli.namespace.clone().or(file.namespace) {
            Some(ns) => Vocabulary::with_namespace(ns),
            None => Vocabulary::ccf(),
        };

        Ok(Self {
            ontology_iri,
            vocab,
            format,
            output: cli.output.clone().or(file.output),
        })
    }
}
