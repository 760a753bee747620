//! specimen2ccf CLI library.
//!
//! Argument parsing, config resolution, and input retrieval for the
//! `specimen2ccf` binary. [`run`] performs one conversion: fetch every
//! input, transform each into a shared store in command-line order, and
//! write the serialized graph.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;

use cli::Cli;
use colored::Colorize;
use error::{CliError, CliResult};
use specimen_ccf::{GraphStore, Transformer};
use std::io::Write;
use std::path::Path;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub statements: usize,
}

/// Execute a parsed [`Cli`].
pub async fn run(cli: &Cli) -> CliResult<Summary> {
    let file = config::load(cli.config.as_deref())?;
    let settings = config::Settings::resolve(cli, file)?;
    let sources = input::parse_all(&cli.inputs)?;

    let documents = input::fetch_all(&sources).await?;

    let mut store = GraphStore::create(settings.ontology_iri.as_str(), &settings.vocab);
    let transformer = Transformer::new(settings.vocab);
    for (source, document) in sources.iter().zip(&documents) {
        let added = transformer
            .transform(document, &mut store)
            .map_err(|error| CliError::Transform {
                location: source.to_string(),
                error,
            })?;
        tracing::info!(source = %source, added, "document converted");
    }

    let rendered = settings.format.format(&store.handoff());
    write_output(settings.output.as_deref(), &rendered)?;

    let summary = Summary {
        documents: documents.len(),
        statements: store.len(),
    };
    if !cli.quiet {
        eprintln!(
            "{} converted {} document(s) into {} statements ({})",
            "done:".green().bold(),
            summary.documents,
            summary.statements,
            settings.format
        );
    }
    Ok(summary)
}

fn write_output(path: Option<&Path>, rendered: &str) -> CliResult<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| CliError::Output(format!("failed to write {}: {e}", path.display()))),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::Output(format!("failed to write to stdout: {e}")))
        }
    }
}
