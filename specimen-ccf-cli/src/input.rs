//! Input document retrieval
//!
//! Resolves each command-line input to a parsed JSON document. Local files
//! are read with `tokio::fs`, `http(s)` URLs are fetched with `reqwest`.
//! All inputs are fetched concurrently; results keep command-line order.

use crate::error::{CliError, CliResult};
use futures::future::try_join_all;
use reqwest::{Client, Url};
use serde_json::Value as JsonValue;
use std::fmt;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;

/// Where an input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A local file, given as a path or a `file://` URL.
    File(PathBuf),
    /// An `http` or `https` URL.
    Remote(Url),
    /// Piped stdin (`-`).
    Stdin,
}

impl InputSource {
    /// Classify one command-line input.
    pub fn parse(spec: &str) -> CliResult<Self> {
        if spec == "-" {
            return Ok(InputSource::Stdin);
        }

        let lower = spec.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(spec)
                .map_err(|e| CliError::Usage(format!("invalid URL '{spec}': {e}")))?;
            return Ok(InputSource::Remote(url));
        }
        if lower.starts_with("file://") {
            let path = Url::parse(spec)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| CliError::Usage(format!("invalid file URL '{spec}'")))?;
            return Ok(InputSource::File(path));
        }

        Ok(InputSource::File(PathBuf::from(spec)))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Remote(url) => write!(f, "{url}"),
            InputSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Parse every input spec, rejecting more than one `-`.
pub fn parse_all(specs: &[String]) -> CliResult<Vec<InputSource>> {
    let sources = specs
        .iter()
        .map(|s| InputSource::parse(s))
        .collect::<CliResult<Vec<_>>>()?;

    if sources.iter().filter(|s| **s == InputSource::Stdin).count() > 1 {
        return Err(CliError::Usage("stdin ('-') may only be given once".into()));
    }
    Ok(sources)
}

/// Fetch and parse all sources concurrently, preserving order.
pub async fn fetch_all(sources: &[InputSource]) -> CliResult<Vec<JsonValue>> {
    let client = if sources.iter().any(|s| matches!(s, InputSource::Remote(_))) {
        Some(
            Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .map_err(|e| CliError::Remote(format!("failed to build HTTP client: {e}")))?,
        )
    } else {
        None
    };

    try_join_all(sources.iter().map(|source| fetch(source, client.as_ref()))).await
}

/// Fetch and parse one source.
pub async fn fetch(source: &InputSource, client: Option<&Client>) -> CliResult<JsonValue> {
    let text = match source {
        InputSource::File(path) => {
            if !path.exists() {
                return Err(CliError::Input(format!(
                    "input not found: {}",
                    path.display()
                )));
            }
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?
        }
        InputSource::Remote(url) => {
            let client = client
                .ok_or_else(|| CliError::Remote(format!("no HTTP client for {url}")))?;
            fetch_remote(client, url).await?
        }
        InputSource::Stdin => read_stdin()?,
    };

    tracing::debug!(source = %source, bytes = text.len(), "input loaded");
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("{source}: JSON parse error: {e}")))
}

async fn fetch_remote(client: &Client, url: &Url) -> CliResult<String> {
    tracing::info!(%url, "fetching remote document");
    let resp = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json, application/ld+json")
        .send()
        .await
        .map_err(|e| CliError::Remote(format!("network error fetching {url}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(CliError::Remote(if body.is_empty() {
            format!("{url}: status {status}")
        } else {
            format!("{url}: status {status}: {body}")
        }));
    }

    resp.text()
        .await
        .map_err(|e| CliError::Remote(format!("failed to read response from {url}: {e}")))
}

fn read_stdin() -> CliResult<String> {
    if io::stdin().is_terminal() {
        return Err(CliError::Usage(
            "'-' reads from stdin, but nothing was piped in".into(),
        ));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sources() {
        assert_eq!(
            InputSource::parse("donors/a.json").unwrap(),
            InputSource::File(PathBuf::from("donors/a.json"))
        );
        assert_eq!(InputSource::parse("-").unwrap(), InputSource::Stdin);
        assert!(matches!(
            InputSource::parse("https://example.org/rui_locations.jsonld").unwrap(),
            InputSource::Remote(_)
        ));
        assert!(matches!(
            InputSource::parse("HTTP://example.org/a.json").unwrap(),
            InputSource::Remote(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        assert_eq!(
            InputSource::parse("file:///tmp/donor.json").unwrap(),
            InputSource::File(PathBuf::from("/tmp/donor.json"))
        );
    }

    #[test]
    fn test_stdin_only_once() {
        let specs = vec!["-".to_string(), "-".to_string()];
        assert!(matches!(parse_all(&specs), Err(CliError::Usage(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = InputSource::File(PathBuf::from("/definitely/not/here.json"));
        let err = fetch(&source, None).await.unwrap_err();
        assert!(err.to_string().contains("input not found"));
    }
}
