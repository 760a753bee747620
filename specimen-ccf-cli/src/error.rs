use colored::Colorize;
use specimen_ccf::TransformError;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Config file missing, unreadable or malformed.
    Config(String),
    /// Bad file path, unreadable input, JSON parse failure.
    Input(String),
    /// Remote document could not be fetched.
    Remote(String),
    /// A document violated the specimen hierarchy rules.
    Transform {
        location: String,
        error: TransformError,
    },
    /// Output could not be written.
    Output(String),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Remote(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Transform { location, error } => {
                write!(f, "{} {location}: {error}", "error:".red().bold())?;
                if error.is_structural() {
                    write!(
                        f,
                        "\n  {} nothing from this document was converted",
                        "note:".cyan().bold()
                    )?;
                }
                Ok(())
            }
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(format!("invalid config file: {e}"))
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        CliError::Remote(format!("network error: {e}"))
    }
}

impl From<specimen_graph_format::FormatError> for CliError {
    fn from(e: specimen_graph_format::FormatError) -> Self {
        CliError::Usage(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
