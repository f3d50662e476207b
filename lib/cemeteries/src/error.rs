use oxrdf::IriParseError;
use oxrdfio::RdfFormat;
use std::io;

/// An error raised while reading the cemetery table or the identity registry.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// An error raised while reading the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The delimited file could not be parsed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A registry record carries an IRI that cannot be parsed.
    #[error("Invalid IRI '{iri}' for registry entry '{name}': {error}")]
    InvalidIri {
        /// The archival name of the record.
        name: String,
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

/// An error raised while mapping a row to RDF.
///
/// Problems with cell *values* never end up here. They are logged and the raw value is kept
/// instead. These errors indicate a mismatch between the column mapping and the input table.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// A column of the mapping is not present in the row.
    #[error("Column '{0}' is missing from the input table")]
    MissingColumn(String),
    /// An identifier minted from the row data is not a valid IRI.
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

/// An error raised while writing the output graphs.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    /// An error raised while writing the content.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A namespace prefix could not be registered with the serializer.
    #[error("Invalid IRI for prefix {prefix}: {error}")]
    InvalidPrefix {
        /// The prefix name.
        prefix: &'static str,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The graphs are plain triples, a format for datasets cannot be used.
    #[error("A RDF format for plain graphs was expected, {0} found")]
    GraphFormatExpected(RdfFormat),
}
