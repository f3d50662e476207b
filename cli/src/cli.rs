use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use warsa_cemeteries::IdentifierPolicy;

#[derive(Parser)]
#[command(about, version, name = "cemeteries")]
/// Converts the war cemetery register from CSV to RDF
pub struct Args {
    /// The cemetery table
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
    /// Directory to write the RDF files to
    ///
    /// It is created if it does not exist.
    #[arg(value_hint = ValueHint::DirPath)]
    pub output: PathBuf,
    /// Registry of cemeteries that already have an identifier
    ///
    /// A delimited file with the columns `original_narc_name`, `uri` and optionally `label`.
    /// Without a registry every cemetery gets a new identifier.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub registry: Option<PathBuf>,
    /// Field delimiter of the cemetery table
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,
    /// Field delimiter of the registry
    #[arg(long, default_value_t = ',')]
    pub registry_delimiter: char,
    /// Start of the identifiers of new cemeteries
    #[arg(long, default_value_t = IdentifierPolicy::default_prefix(), value_hint = ValueHint::Url)]
    pub id_prefix: String,
    /// Number of the first new cemetery
    #[arg(long, default_value_t = IdentifierPolicy::DEFAULT_BASE)]
    pub id_base: u64,
    /// End of the identifiers of new cemeteries
    #[arg(long, default_value = "")]
    pub id_suffix: String,
    /// The output format
    ///
    /// It can be an extension like "nt" or a MIME type like "application/n-triples".
    #[arg(long, default_value = "ttl")]
    pub format: String,
    /// Logging level
    ///
    /// The `RUST_LOG` environment variable takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,
    /// Append the log to this file instead of writing it to stderr
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
