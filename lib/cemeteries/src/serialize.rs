//! Writes the output graphs with [`oxrdfio`].

use crate::assembler::OutputGraphs;
use crate::error::SerializerError;
use crate::vocab::ns;
use oxrdf::Graph;
use oxrdfio::RdfSerializer;
pub use oxrdfio::RdfFormat;
use std::io::Write;

const DATA_PREFIXES: [(&str, &str); 9] = [
    ("", ns::WARSA_SCHEMA),
    ("wces", ns::CEMETERY_SCHEMA),
    ("skos", ns::SKOS),
    ("crm", ns::CIDOC),
    ("foaf", ns::FOAF),
    ("bioc", ns::BIOC),
    ("wgs84", ns::WGS84),
    ("dc-terms", ns::DC),
    ("xsd", ns::XSD),
];

const PHOTOGRAPH_PREFIXES: [(&str, &str); 8] = [
    ("", ns::WARSA_SCHEMA),
    ("crm", ns::CIDOC),
    ("schema", ns::SCHEMA_ORG),
    ("dc-terms", ns::DC),
    ("wces", ns::CEMETERY_SCHEMA),
    ("wph", ns::PHOTOGRAPHS),
    ("wev", ns::EVENTS),
    ("wme", ns::MEDIA),
];

const INFORMATION_OBJECT_PREFIXES: [(&str, &str); 6] = [
    ("skos", ns::SKOS),
    ("cidoc", ns::CIDOC),
    ("schema", ns::SCHEMA_ORG),
    ("wphs", ns::PHOTOGRAPH_SCHEMA),
    ("wme", ns::MEDIA),
    ("wph", ns::PHOTOGRAPHS),
];

const SCHEMA_PREFIXES: [(&str, &str); 8] = [
    ("", ns::WARSA_SCHEMA),
    ("wces", ns::CEMETERY_SCHEMA),
    ("skos", ns::SKOS),
    ("cidoc", ns::CIDOC),
    ("foaf", ns::FOAF),
    ("bioc", ns::BIOC),
    ("wgs84", ns::WGS84),
    ("dc-terms", ns::DC),
];

/// One of the four output graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Data,
    Photographs,
    InformationObjects,
    Schema,
}

impl OutputKind {
    pub const ALL: [OutputKind; 4] = [
        OutputKind::Data,
        OutputKind::Photographs,
        OutputKind::InformationObjects,
        OutputKind::Schema,
    ];

    /// The name of the output file, without extension.
    pub const fn file_stem(self) -> &'static str {
        match self {
            OutputKind::Data => "cemeteries",
            OutputKind::Photographs => "cemeteries-photographs",
            OutputKind::InformationObjects => "cemetery-photo-media",
            OutputKind::Schema => "cemeteries-schema",
        }
    }

    /// The namespace prefixes declared in the output.
    pub fn prefixes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            OutputKind::Data => &DATA_PREFIXES,
            OutputKind::Photographs => &PHOTOGRAPH_PREFIXES,
            OutputKind::InformationObjects => &INFORMATION_OBJECT_PREFIXES,
            OutputKind::Schema => &SCHEMA_PREFIXES,
        }
    }

    pub fn graph(self, graphs: &OutputGraphs) -> &Graph {
        match self {
            OutputKind::Data => &graphs.data,
            OutputKind::Photographs => &graphs.photographs,
            OutputKind::InformationObjects => &graphs.information_objects,
            OutputKind::Schema => &graphs.schema,
        }
    }

    /// The file name for the given format, e.g. `cemeteries.ttl`.
    pub fn file_name(self, format: RdfFormat) -> String {
        format!("{}.{}", self.file_stem(), format.file_extension())
    }
}

/// Writes a graph to `writer` and returns the writer.
pub fn write_graph<W: Write>(
    graph: &Graph,
    format: RdfFormat,
    prefixes: &[(&'static str, &'static str)],
    writer: W,
) -> Result<W, SerializerError> {
    if format.supports_datasets() {
        return Err(SerializerError::GraphFormatExpected(format));
    }
    let mut serializer = RdfSerializer::from_format(format);
    for &(prefix, iri) in prefixes {
        serializer = serializer
            .with_prefix(prefix, iri)
            .map_err(|error| SerializerError::InvalidPrefix { prefix, error })?;
    }
    let mut serializer = serializer.for_writer(writer);
    for triple in graph {
        serializer.serialize_triple(triple)?;
    }
    Ok(serializer.finish()?)
}

/// Serializes all four graphs into memory.
///
/// Either every graph is serialized or an error is returned, so nothing needs to be written
/// before all of them succeeded.
pub fn serialize_graphs(
    graphs: &OutputGraphs,
    format: RdfFormat,
) -> Result<Vec<(OutputKind, Vec<u8>)>, SerializerError> {
    OutputKind::ALL
        .into_iter()
        .map(|kind| {
            let content = write_graph(kind.graph(graphs), format, kind.prefixes(), Vec::new())?;
            Ok((kind, content))
        })
        .collect()
}
