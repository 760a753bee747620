use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "specimen2ccf",
    about = "Convert specimen records (donors, tissue blocks, sections, datasets) to CCF RDF",
    version
)]
pub struct Cli {
    /// Input documents: local paths, file:// or http(s):// URLs, or `-` for stdin
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// IRI of the generated ontology (required unless set in the config file)
    #[arg(long, value_name = "IRI")]
    pub ontology_iri: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (turtle or ntriples) [default: turtle]
    #[arg(long)]
    pub format: Option<String>,

    /// Namespace for CCF classes and properties [default: http://purl.org/ccf/]
    #[arg(long, value_name = "IRI")]
    pub namespace: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,

    /// Path to config file [default: ./specimen2ccf.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inputs_and_flags() {
        let cli = Cli::try_parse_from([
            "specimen2ccf",
            "a.json",
            "https://example.org/b.json",
            "--ontology-iri",
            "https://example.org/specimens.owl",
            "--format",
            "nt",
            "-o",
            "out.nt",
        ])
        .unwrap();

        assert_eq!(cli.inputs, vec!["a.json", "https://example.org/b.json"]);
        assert_eq!(
            cli.ontology_iri.as_deref(),
            Some("https://example.org/specimens.owl")
        );
        assert_eq!(cli.format.as_deref(), Some("nt"));
        assert_eq!(cli.output, Some(PathBuf::from("out.nt")));
        assert!(!cli.verbose && !cli.quiet);
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["specimen2ccf", "--ontology-iri", "x"]).is_err());
    }
}
