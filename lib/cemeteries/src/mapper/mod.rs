//! Maps the rows of the cemetery table to RDF.

mod photographs;

pub use photographs::{
    create_photo_entities, PhotoDescription, PhotoEntities, LARGE_MEDIA_BASE, SMALL_MEDIA_BASE,
};

use crate::converters::{convert_int, is_missing, split_cemetery_name, ConvertedValue};
use crate::error::MappingError;
use crate::mapping::{
    photo_caption, translate_caption, ColumnKind, ColumnMapping, ColumnMappings,
    CAMERA_CLUB_COLUMN, CEMETERY_NUMBER_COLUMN,
};
use crate::table::Row;
use crate::vocab::{class, source, Relation};
use oxrdf::{Graph, Literal, LiteralRef, NamedNode, NamedNodeRef, TripleRef};
use tracing::{debug, warn};

/// Builds an IRI from a namespace and a local name.
pub(crate) fn mint(namespace: &str, local: &str) -> Result<NamedNode, MappingError> {
    let iri = format!("{namespace}{local}");
    NamedNode::new(iri.as_str()).map_err(|error| MappingError::InvalidIri { iri, error })
}

/// The state shared by all rows of one run.
///
/// Photos are not part of a row's fragment. They are collected here, next to the number of photos
/// created so far.
#[derive(Clone, Debug, Default)]
pub struct MappingContext {
    pub photographs: Graph,
    pub information_objects: Graph,
    pub photo_count: usize,
}

impl MappingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the triples of one photo.
    pub fn add_photo(&mut self, entities: &PhotoEntities) {
        self.photographs.extend(&entities.photographs);
        self.information_objects.extend(&entities.information_objects);
        self.photo_count += 1;
    }
}

/// Walks a [`ColumnMappings`] table against single rows.
#[derive(Clone, Debug)]
pub struct RowMapper {
    mappings: ColumnMappings,
    instance_class: NamedNode,
}

impl Default for RowMapper {
    fn default() -> Self {
        Self::new(ColumnMappings::default(), class::CEMETERY.into_owned())
    }
}

impl RowMapper {
    pub fn new(mappings: ColumnMappings, instance_class: NamedNode) -> Self {
        Self {
            mappings,
            instance_class,
        }
    }

    pub fn mappings(&self) -> ColumnMappings {
        self.mappings
    }

    pub fn instance_class(&self) -> NamedNodeRef<'_> {
        self.instance_class.as_ref()
    }

    /// Maps one row describing `entity` to a graph fragment.
    ///
    /// Photos end up in `context`. The returned fragment only holds triples about `entity` and is
    /// empty if no column carried data, in which case no type is asserted either.
    pub fn map_row(
        &self,
        context: &mut MappingContext,
        entity: &NamedNode,
        row: &Row,
    ) -> Result<Graph, MappingError> {
        let mut fragment = Graph::new();

        for mapping in self.mappings.iter() {
            let raw = row.value(mapping.column)?;
            if is_missing(raw) {
                continue;
            }
            let value = mapping.convert(raw);

            match mapping.kind {
                ColumnKind::Float(relation) => {
                    if let ConvertedValue::Float(_) = value {
                        insert_value(&mut fragment, entity, relation, &value);
                    }
                }
                ColumnKind::CompoundName {
                    current,
                    former,
                    narc_name,
                } => {
                    let name = match value {
                        ConvertedValue::CemeteryName(name) => name,
                        _ => split_cemetery_name(raw),
                    };
                    if !name.current_municipality.is_empty() {
                        fragment.insert(TripleRef::new(
                            entity,
                            current,
                            LiteralRef::new_simple_literal(&name.current_municipality),
                        ));
                    }
                    if let Some(former_municipality) = &name.former_municipality {
                        fragment.insert(TripleRef::new(
                            entity,
                            former,
                            LiteralRef::new_simple_literal(former_municipality),
                        ));
                    }
                    fragment.insert(TripleRef::new(
                        entity,
                        narc_name,
                        LiteralRef::new_simple_literal(&name.narc_name),
                    ));
                }
                ColumnKind::PhotoSlot { slot } => {
                    self.map_photo(context, entity, row, mapping, slot, raw)?;
                }
                ColumnKind::PhotographerName { .. } => {}
                ColumnKind::Scalar(relation) | ColumnKind::NumericOrString(relation) => {
                    insert_value(&mut fragment, entity, relation, &value);
                }
            }
        }

        if fragment.is_empty() {
            debug!("No data found for {entity}");
        } else {
            fragment.insert(TripleRef::new(entity, Relation::Type, &self.instance_class));
            fragment.insert(TripleRef::new(
                entity,
                Relation::Source,
                source::PHOTOGRAPHY_PROJECT,
            ));
            fragment.insert(TripleRef::new(
                entity,
                Relation::Source,
                source::CASUALTY_REGISTER,
            ));
        }
        Ok(fragment)
    }

    fn map_photo(
        &self,
        context: &mut MappingContext,
        entity: &NamedNode,
        row: &Row,
        mapping: &ColumnMapping,
        slot: u8,
        filename: &str,
    ) -> Result<(), MappingError> {
        let photographer = match self.mappings.photographer(slot) {
            Some(photographer) => {
                let raw = row.value(photographer.column)?;
                if is_missing(raw) {
                    None
                } else {
                    photographer.convert(raw).to_literal()
                }
            }
            None => None,
        };
        let camera_club = Some(row.value(CAMERA_CLUB_COLUMN)?).filter(|club| !is_missing(club));

        let number = row.value(CEMETERY_NUMBER_COLUMN)?;
        let ConvertedValue::Integer(number) = convert_int(number) else {
            warn!("Photo {filename} of {entity} skipped, '{number}' is not a cemetery number");
            return Ok(());
        };
        let cemetery_id = format!("{number:03}");

        let caption_fi = photo_caption(mapping.column);
        let caption_en = translate_caption(&caption_fi);
        if caption_en.is_none() {
            warn!("No English caption for {caption_fi}");
        }

        let entities = create_photo_entities(&PhotoDescription {
            filename,
            photographer,
            camera_club,
            cemetery_id: &cemetery_id,
            cemetery: entity.as_ref(),
            slot_number: &format!("0{slot}"),
            caption_fi: &caption_fi,
            caption_en,
        })?;
        context.add_photo(&entities);
        Ok(())
    }
}

fn insert_value(fragment: &mut Graph, entity: &NamedNode, relation: Relation, value: &ConvertedValue) {
    if let Some(literal) = value.to_literal() {
        fragment.insert(TripleRef::new(entity, relation, &literal));
    }
}

/// A literal of the English language.
pub(crate) fn english(value: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(value, "en")
}

/// A literal of the Finnish language.
pub(crate) fn finnish(value: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(value, "fi")
}
