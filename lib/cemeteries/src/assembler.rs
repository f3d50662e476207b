//! Runs a whole table through reconciliation and mapping.

use crate::config::ConversionOptions;
use crate::converters::{is_missing, split_cemetery_name, NOT_APPLICABLE, NOT_APPLICABLE_SPACED};
use crate::error::MappingError;
use crate::mapper::{english, finnish, MappingContext, RowMapper};
use crate::mapping::{ColumnMappings, MUNICIPALITY_COLUMN, TYPE_COLUMN};
use crate::registry::{Reconciler, Registry};
use crate::table::{CemeteryTable, Row};
use crate::vocab::{class, Relation};
use oxrdf::{Graph, LiteralRef, NamedNode, TripleRef};
use tracing::{debug, info};

/// The four graphs produced by a run.
#[derive(Clone, Debug, Default)]
pub struct OutputGraphs {
    /// Facts about the cemeteries.
    pub data: Graph,
    /// Photographs and photography events.
    pub photographs: Graph,
    /// Full size and thumbnail renditions of the photographs.
    pub information_objects: Graph,
    /// The properties used in `data`, with Finnish and English labels.
    pub schema: Graph,
}

/// Counters of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionStatistics {
    /// Cemeteries in the registry before the run.
    pub known: usize,
    /// Rows whose identifier was found in the registry.
    pub reconciled: usize,
    /// Rows that got a new identifier.
    pub allocated: usize,
    /// Registry entries no row matched.
    pub orphaned: usize,
    /// Rows that do not describe a cemetery.
    pub skipped_rows: usize,
    /// Rows without any usable value.
    pub empty_rows: usize,
    pub photographs: usize,
}

/// The result of a run.
#[derive(Clone, Debug, Default)]
pub struct Conversion {
    pub graphs: OutputGraphs,
    pub statistics: ConversionStatistics,
}

/// Collects the graphs of a run, row by row.
///
/// Rows must be fed in table order: a registry entry matched by one row is no longer available to
/// the rows after it.
#[derive(Debug)]
pub struct GraphAssembler {
    mapper: RowMapper,
    reconciler: Reconciler,
    context: MappingContext,
    data: Graph,
    skipped_rows: usize,
    empty_rows: usize,
}

impl GraphAssembler {
    pub fn new(options: ConversionOptions, registry: Registry) -> Self {
        Self::with_mappings(ColumnMappings::default(), options, registry)
    }

    pub fn with_mappings(
        mappings: ColumnMappings,
        options: ConversionOptions,
        registry: Registry,
    ) -> Self {
        Self {
            mapper: RowMapper::new(mappings, options.instance_class),
            reconciler: Reconciler::new(registry, options.identifiers),
            context: MappingContext::new(),
            data: Graph::new(),
            skipped_rows: 0,
            empty_rows: 0,
        }
    }

    /// Maps one row. Returns the identifier of the cemetery, or `None` if the row was skipped.
    pub fn process_row(&mut self, row: &Row) -> Result<Option<NamedNode>, MappingError> {
        if let Some(kind @ (NOT_APPLICABLE | NOT_APPLICABLE_SPACED)) = row.get(TYPE_COLUMN) {
            debug!("Skipping row of type '{kind}'");
            self.skipped_rows += 1;
            return Ok(None);
        }

        let municipality = row.value(MUNICIPALITY_COLUMN)?;
        let key = if is_missing(municipality) {
            String::new()
        } else {
            split_cemetery_name(municipality).normalized_narc_name()
        };
        let entity = self.reconciler.reconcile(&key)?.into_node();

        let fragment = self.mapper.map_row(&mut self.context, &entity, row)?;
        if fragment.is_empty() {
            self.empty_rows += 1;
        }
        self.data.extend(&fragment);
        Ok(Some(entity))
    }

    /// Maps the rows in order.
    pub fn process_rows<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a Row>,
    ) -> Result<(), MappingError> {
        for row in rows {
            self.process_row(row)?;
        }
        Ok(())
    }

    /// Adds the placeholders of unmatched registry entries and the schema.
    pub fn finish(self) -> Conversion {
        let Self {
            mapper,
            reconciler,
            context,
            mut data,
            skipped_rows,
            empty_rows,
        } = self;

        let report = reconciler.finish();
        for orphan in &report.orphans {
            data.insert(TripleRef::new(&orphan.uri, Relation::Type, mapper.instance_class()));
            data.insert(TripleRef::new(
                &orphan.uri,
                Relation::PrefLabel,
                LiteralRef::new_simple_literal(&orphan.label),
            ));
        }

        let schema = build_schema(mapper.mappings());

        let statistics = ConversionStatistics {
            known: report.known,
            reconciled: report.reconciled,
            allocated: report.allocated,
            orphaned: report.orphans.len(),
            skipped_rows,
            empty_rows,
            photographs: context.photo_count,
        };
        info!(
            "{} known cemeteries, {} found in the data, {} new, {} not found in the data",
            statistics.known, statistics.reconciled, statistics.allocated, statistics.orphaned
        );
        info!(
            "{} rows skipped, {} rows without data, {} photographs",
            statistics.skipped_rows, statistics.empty_rows, statistics.photographs
        );

        Conversion {
            graphs: OutputGraphs {
                data,
                photographs: context.photographs,
                information_objects: context.information_objects,
                schema,
            },
            statistics,
        }
    }
}

/// Declares every labelled property of the mapping.
pub fn build_schema(mappings: ColumnMappings) -> Graph {
    let mut schema = Graph::new();
    for label in mappings.property_labels() {
        let property = label.relation.iri();
        schema.insert(TripleRef::new(property, Relation::Type, class::PROPERTY));
        schema.insert(TripleRef::new(property, Relation::PrefLabel, &finnish(label.fi)));
        schema.insert(TripleRef::new(property, Relation::PrefLabel, &english(label.en)));
    }
    schema
}

/// Converts a whole table.
pub fn convert(
    table: &CemeteryTable,
    registry: Registry,
    options: ConversionOptions,
) -> Result<Conversion, MappingError> {
    let mut assembler = GraphAssembler::new(options, registry);
    assembler.process_rows(table.rows())?;
    Ok(assembler.finish())
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn, clippy::non_ascii_literal)]
mod tests {
    use super::*;
    use crate::registry::RegistryRecord;

    const COLUMNS: [&str; 24] = [
        "tyyppi",
        "nro",
        "nykyiset_kunnat",
        "kuvaukset_toteuttanut_kameraseura",
        "hautausmaan_nimi",
        "arkkitehti",
        "hautoja",
        "perustettu",
        "paljastettu",
        "nimi",
        "kuvanveistäjä",
        "pituus_n",
        "leveys_e",
        "tarkka_katuosoite",
        "kuva_1_yleiskuva_sankarihautausmaasta",
        "kuva_1_kuvaajan_nimi",
        "kuva_2_yksittäinen_hauta_risteineen_muistolaattoineen",
        "kuva_2_kuvaajan_nimi",
        "kuva_3_muistomerkki",
        "kuva_3_kuvaajan_nimi",
        "kuva_4_yleiskuva",
        "kuva_4_kuvaajan_nimi",
        "kuva_5_muu_muistomerkki",
        "kuva_5_kuvaajan_nimi",
    ];

    /// Builds a table from rows given as (column, value) pairs.
    fn table(rows: &[&[(&str, &str)]]) -> CemeteryTable {
        let mut csv = COLUMNS.join(";");
        csv.push('\n');
        for row in rows {
            let line = COLUMNS
                .iter()
                .map(|column| {
                    row.iter()
                        .find(|(name, _)| name == column)
                        .map_or("", |(_, value)| *value)
                })
                .collect::<Vec<_>>()
                .join(";");
            csv.push_str(&line);
            csv.push('\n');
        }
        CemeteryTable::from_reader(csv.as_bytes(), b';').unwrap_or_default()
    }

    fn registry(names: &[(&str, &str)]) -> Registry {
        let mut registry = Registry::new();
        for (name, uri) in names {
            let _inserted = registry.insert_record(RegistryRecord {
                original_narc_name: (*name).to_owned(),
                uri: (*uri).to_owned(),
                label: None,
            });
        }
        registry
    }

    #[test]
    fn test_table_is_complete() {
        let table = table(&[&[("nro", "1")], &[]]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers().len(), COLUMNS.len());
    }

    #[test]
    fn not_applicable_rows_are_skipped() -> Result<(), MappingError> {
        let table = table(&[
            &[
                ("tyyppi", "ei_ole"),
                ("nro", "1"),
                ("nykyiset_kunnat", "Helsinki, Suomi"),
                ("hautausmaan_nimi", "Hietaniemi"),
            ],
            &[
                ("nro", "2"),
                ("nykyiset_kunnat", "Espoo, Suomi"),
                ("hautausmaan_nimi", "Espoo"),
            ],
        ]);
        let conversion = convert(&table, Registry::new(), ConversionOptions::default())?;
        assert_eq!(conversion.statistics.skipped_rows, 1);
        assert_eq!(conversion.statistics.allocated, 1);
        assert!(conversion.graphs.data.contains(TripleRef::new(
            &NamedNode::new_unchecked("http://ldf.fi/warsa/places/cemeteries/c_3000"),
            Relation::PrefLabel,
            LiteralRef::new_simple_literal("Espoo")
        )));
        Ok(())
    }

    #[test]
    fn malformed_cemetery_number_does_not_abort_the_run() -> Result<(), MappingError> {
        let table = table(&[
            &[
                ("nro", "7 b"),
                ("nykyiset_kunnat", "Helsinki, Suomi"),
                ("hautausmaan_nimi", "Hietaniemi"),
                ("kuva_1_yleiskuva_sankarihautausmaasta", "007_1.jpg"),
            ],
            &[
                ("nro", "8"),
                ("nykyiset_kunnat", "Espoo, Suomi"),
                ("hautausmaan_nimi", "Espoo"),
                ("kuva_1_yleiskuva_sankarihautausmaasta", "008_1.jpg"),
            ],
        ]);
        let conversion = convert(&table, Registry::new(), ConversionOptions::default())?;
        assert_eq!(conversion.statistics.allocated, 2);
        assert_eq!(conversion.statistics.photographs, 1);
        assert!(conversion.graphs.data.contains(TripleRef::new(
            &NamedNode::new_unchecked("http://ldf.fi/warsa/places/cemeteries/c_3001"),
            Relation::PrefLabel,
            LiteralRef::new_simple_literal("Espoo")
        )));
        Ok(())
    }

    #[test]
    fn allocation_never_reuses_a_registry_identifier() -> Result<(), MappingError> {
        let table = table(&[
            &[
                ("nro", "1"),
                ("nykyiset_kunnat", "Espoo, Suomi"),
                ("hautausmaan_nimi", "Espoo"),
            ],
            &[
                ("nro", "2"),
                ("nykyiset_kunnat", "Helsinki, Suomi"),
                ("hautausmaan_nimi", "Hietaniemi"),
            ],
        ]);
        let registry = registry(&[(
            "Helsinki, Suomi",
            "http://ldf.fi/warsa/places/cemeteries/c_3000",
        )]);
        let conversion = convert(&table, registry, ConversionOptions::default())?;

        let helsinki = NamedNode::new_unchecked("http://ldf.fi/warsa/places/cemeteries/c_3000");
        let espoo = NamedNode::new_unchecked("http://ldf.fi/warsa/places/cemeteries/c_3001");
        assert_eq!(
            conversion
                .graphs
                .data
                .triples_for_subject(&helsinki)
                .filter(|triple| triple.predicate == Relation::PrefLabel.iri())
                .count(),
            1
        );
        assert!(conversion.graphs.data.contains(TripleRef::new(
            &espoo,
            Relation::PrefLabel,
            LiteralRef::new_simple_literal("Espoo")
        )));
        assert_eq!(conversion.statistics.reconciled, 1);
        assert_eq!(conversion.statistics.allocated, 1);
        Ok(())
    }

    #[test]
    fn orphans_become_placeholders() -> Result<(), MappingError> {
        let table = table(&[&[
            ("nro", "1"),
            ("nykyiset_kunnat", "Helsinki, Suomi"),
            ("hautausmaan_nimi", "Hietaniemi"),
        ]]);
        let registry = registry(&[
            ("Helsinki, Suomi", "http://ldf.fi/warsa/places/cemeteries/c_1"),
            ("Vantaa, Suomi", "http://ldf.fi/warsa/places/cemeteries/c_2"),
        ]);
        let conversion = convert(&table, registry, ConversionOptions::default())?;

        let orphan = NamedNode::new_unchecked("http://ldf.fi/warsa/places/cemeteries/c_2");
        assert_eq!(conversion.graphs.data.triples_for_subject(&orphan).count(), 2);
        assert!(conversion.graphs.data.contains(TripleRef::new(
            &orphan,
            Relation::PrefLabel,
            LiteralRef::new_simple_literal("Vantaa, Suomi")
        )));
        assert!(conversion.graphs.data.contains(TripleRef::new(
            &orphan,
            Relation::Type,
            class::CEMETERY
        )));
        assert_eq!(
            conversion.statistics,
            ConversionStatistics {
                known: 2,
                reconciled: 1,
                allocated: 0,
                orphaned: 1,
                skipped_rows: 0,
                empty_rows: 0,
                photographs: 0,
            }
        );
        Ok(())
    }

    #[test]
    fn empty_rows_are_counted() -> Result<(), MappingError> {
        let table = table(&[&[("hautoja", "ei_ole")]]);
        let conversion = convert(&table, Registry::new(), ConversionOptions::default())?;
        assert_eq!(conversion.statistics.empty_rows, 1);
        assert!(conversion.graphs.data.is_empty());
        Ok(())
    }

    #[test]
    fn schema_has_bilingual_labels() {
        let schema = build_schema(ColumnMappings::default());
        let address = Relation::Address.iri();
        assert!(schema.contains(TripleRef::new(address, Relation::Type, class::PROPERTY)));
        assert!(schema.contains(TripleRef::new(
            address,
            Relation::PrefLabel,
            LiteralRef::new_language_tagged_literal_unchecked("Osoite", "fi")
        )));
        assert!(schema.contains(TripleRef::new(
            address,
            Relation::PrefLabel,
            LiteralRef::new_language_tagged_literal_unchecked("Address", "en")
        )));
        for relation in [
            Relation::CurrentMunicipality,
            Relation::FormerMunicipality,
            Relation::OriginalNarcName,
        ] {
            assert_eq!(schema.triples_for_subject(relation.iri()).count(), 3);
        }
        assert_eq!(schema.triples_for_subject(Relation::Latitude.iri()).count(), 0);
    }

    #[test]
    fn custom_instance_class() -> Result<(), MappingError> {
        let instance_class =
            NamedNode::new_unchecked("http://ldf.fi/schema/warsa/places/cemeteries/TempCemetery");
        let options = ConversionOptions::default().with_instance_class(instance_class.clone());
        let table = table(&[&[
            ("nro", "1"),
            ("nykyiset_kunnat", "Helsinki, Suomi"),
            ("hautausmaan_nimi", "Hietaniemi"),
        ]]);
        let conversion = convert(&table, Registry::new(), options)?;
        assert_eq!(
            conversion
                .graphs
                .data
                .subjects_for_predicate_object(Relation::Type, &instance_class)
                .count(),
            1
        );
        Ok(())
    }
}
