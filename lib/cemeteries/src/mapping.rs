#![allow(clippy::non_ascii_literal, reason = "Column headers and labels are Finnish")]

//! The declarative mapping from cemetery table columns to relations.

use crate::converters::{ConvertedValue, Converter};
use crate::vocab::Relation;

/// The column holding the cemetery number, used for minting photo identifiers.
pub const CEMETERY_NUMBER_COLUMN: &str = "nro";
/// The column holding the compound municipality name, used for identity reconciliation.
pub const MUNICIPALITY_COLUMN: &str = "nykyiset_kunnat";
/// The column holding the camera club that photographed the cemetery.
pub const CAMERA_CLUB_COLUMN: &str = "kuvaukset_toteuttanut_kameraseura";
/// Rows where this column is not applicable do not describe a cemetery.
pub const TYPE_COLUMN: &str = "tyyppi";

/// How the values of a column end up in the graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// One literal with the given relation.
    Scalar(Relation),
    /// An `xsd:float` literal. Nothing is emitted if the converter yields no value.
    Float(Relation),
    /// A compound municipality name that fans out into up to three literals.
    CompoundName {
        current: Relation,
        former: Relation,
        narc_name: Relation,
    },
    /// The file name of one of the photos. Creates photograph and photography entities.
    PhotoSlot { slot: u8 },
    /// The photographer of a photo slot. Only read as input of the photo slot.
    PhotographerName { slot: u8 },
    /// An `xsd:integer` literal if the value converts to an integer, a plain literal otherwise.
    NumericOrString(Relation),
}

/// Bilingual labels of one schema property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyLabel {
    pub relation: Relation,
    pub fi: &'static str,
    pub en: &'static str,
}

/// The mapping of one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    pub column: &'static str,
    pub kind: ColumnKind,
    pub converter: Option<Converter>,
    /// Labels of the schema properties produced by this column. Empty for columns that only
    /// feed into other columns.
    pub labels: &'static [PropertyLabel],
}

impl ColumnMapping {
    const fn new(column: &'static str, kind: ColumnKind) -> Self {
        Self {
            column,
            kind,
            converter: None,
            labels: &[],
        }
    }

    const fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = Some(converter);
        self
    }

    const fn with_labels(mut self, labels: &'static [PropertyLabel]) -> Self {
        self.labels = labels;
        self
    }

    /// Applies the converter of this column, if any.
    pub fn convert(&self, raw: &str) -> ConvertedValue {
        match self.converter {
            Some(converter) => converter.apply(raw),
            None => ConvertedValue::Text(raw.to_owned()),
        }
    }
}

/// A column mapping table together with lookups over it.
#[derive(Clone, Copy, Debug)]
pub struct ColumnMappings(&'static [ColumnMapping]);

impl ColumnMappings {
    pub const fn new(mappings: &'static [ColumnMapping]) -> Self {
        Self(mappings)
    }

    /// Iterates the mappings in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ColumnMapping> {
        self.0.iter()
    }

    /// Returns the mapping of `column`.
    pub fn get(&self, column: &str) -> Option<&'static ColumnMapping> {
        self.0.iter().find(|mapping| mapping.column == column)
    }

    /// Returns the photographer column belonging to a photo slot.
    pub fn photographer(&self, slot: u8) -> Option<&'static ColumnMapping> {
        self.0.iter().find(
            |mapping| matches!(mapping.kind, ColumnKind::PhotographerName { slot: s } if s == slot),
        )
    }

    /// Iterates the labels of every schema property, in table order.
    pub fn property_labels(&self) -> impl Iterator<Item = &'static PropertyLabel> {
        self.0.iter().flat_map(|mapping| mapping.labels.iter())
    }
}

impl Default for ColumnMappings {
    fn default() -> Self {
        CEMETERY_MAPPING
    }
}

const CEMETERY_COLUMNS: [ColumnMapping; 23] = [
    ColumnMapping::new(CEMETERY_NUMBER_COLUMN, ColumnKind::Scalar(Relation::CemeteryId))
        .with_converter(Converter::TrailingZeros)
        .with_labels(&[PropertyLabel {
            relation: Relation::CemeteryId,
            fi: "Hautausmaan tunniste",
            en: "Cemetery identifier",
        }]),
    ColumnMapping::new(
        MUNICIPALITY_COLUMN,
        ColumnKind::CompoundName {
            current: Relation::CurrentMunicipality,
            former: Relation::FormerMunicipality,
            narc_name: Relation::OriginalNarcName,
        },
    )
    .with_converter(Converter::CemeteryName)
    .with_labels(&[
        PropertyLabel {
            relation: Relation::CurrentMunicipality,
            fi: "Nykyinen kunta",
            en: "Current municipality",
        },
        PropertyLabel {
            relation: Relation::FormerMunicipality,
            fi: "Entinen kunta",
            en: "Former municipality",
        },
        PropertyLabel {
            relation: Relation::OriginalNarcName,
            fi: "Alkuperäinen nimi Kansallisarkistossa",
            en: "Original name in the National Archives",
        },
    ]),
    ColumnMapping::new(CAMERA_CLUB_COLUMN, ColumnKind::Scalar(Relation::CameraClub)).with_labels(
        &[PropertyLabel {
            relation: Relation::CameraClub,
            fi: "Kuvaukset toteuttanut kameraseura",
            en: "Camera club",
        }],
    ),
    ColumnMapping::new("hautausmaan_nimi", ColumnKind::Scalar(Relation::PrefLabel)),
    ColumnMapping::new("arkkitehti", ColumnKind::Scalar(Relation::Architect))
        .with_converter(Converter::StripDash)
        .with_labels(&[PropertyLabel {
            relation: Relation::Architect,
            fi: "Arkkitehti",
            en: "Architect",
        }]),
    ColumnMapping::new("hautoja", ColumnKind::NumericOrString(Relation::NumberOfGraves))
        .with_converter(Converter::Integer)
        .with_labels(&[PropertyLabel {
            relation: Relation::NumberOfGraves,
            fi: "Hautojen lukumäärä",
            en: "Number of graves",
        }]),
    ColumnMapping::new("perustettu", ColumnKind::Scalar(Relation::DateOfFoundation))
        .with_converter(Converter::Date)
        .with_labels(&[PropertyLabel {
            relation: Relation::DateOfFoundation,
            fi: "Perustamisvuosi",
            en: "Date of foundation",
        }]),
    ColumnMapping::new(
        "paljastettu",
        ColumnKind::Scalar(Relation::MemorialUnveilingDate),
    )
    .with_converter(Converter::Date)
    .with_labels(&[PropertyLabel {
        relation: Relation::MemorialUnveilingDate,
        fi: "Muistomerkin paljastamisaika",
        en: "Memorial unveiling date",
    }]),
    ColumnMapping::new("nimi", ColumnKind::Scalar(Relation::Memorial))
        .with_converter(Converter::StripDash)
        .with_labels(&[PropertyLabel {
            relation: Relation::Memorial,
            fi: "Muistomerkin nimi",
            en: "Memorial",
        }]),
    ColumnMapping::new("kuvanveistäjä", ColumnKind::Scalar(Relation::MemorialSculptor))
        .with_converter(Converter::StripDash)
        .with_labels(&[PropertyLabel {
            relation: Relation::MemorialSculptor,
            fi: "Kuvanveistäjä",
            en: "Sculptor",
        }]),
    ColumnMapping::new("pituus_n", ColumnKind::Float(Relation::Latitude))
        .with_converter(Converter::Coordinate),
    ColumnMapping::new("leveys_e", ColumnKind::Float(Relation::Longitude))
        .with_converter(Converter::Coordinate),
    ColumnMapping::new("tarkka_katuosoite", ColumnKind::Scalar(Relation::Address))
        .with_converter(Converter::StripDash)
        .with_labels(&[PropertyLabel {
            relation: Relation::Address,
            fi: "Osoite",
            en: "Address",
        }]),
    ColumnMapping::new(
        "kuva_1_yleiskuva_sankarihautausmaasta",
        ColumnKind::PhotoSlot { slot: 1 },
    ),
    ColumnMapping::new(
        "kuva_1_kuvaajan_nimi",
        ColumnKind::PhotographerName { slot: 1 },
    ),
    ColumnMapping::new(
        "kuva_2_yksittäinen_hauta_risteineen_muistolaattoineen",
        ColumnKind::PhotoSlot { slot: 2 },
    ),
    ColumnMapping::new(
        "kuva_2_kuvaajan_nimi",
        ColumnKind::PhotographerName { slot: 2 },
    ),
    ColumnMapping::new("kuva_3_muistomerkki", ColumnKind::PhotoSlot { slot: 3 }),
    ColumnMapping::new(
        "kuva_3_kuvaajan_nimi",
        ColumnKind::PhotographerName { slot: 3 },
    ),
    ColumnMapping::new("kuva_4_yleiskuva", ColumnKind::PhotoSlot { slot: 4 }),
    ColumnMapping::new(
        "kuva_4_kuvaajan_nimi",
        ColumnKind::PhotographerName { slot: 4 },
    ),
    ColumnMapping::new("kuva_5_muu_muistomerkki", ColumnKind::PhotoSlot { slot: 5 }),
    ColumnMapping::new(
        "kuva_5_kuvaajan_nimi",
        ColumnKind::PhotographerName { slot: 5 },
    ),
];

/// The mapping of the war cemetery table.
pub const CEMETERY_MAPPING: ColumnMappings = ColumnMappings::new(&CEMETERY_COLUMNS);

/// Finnish captions of the photo slots and their English translations.
const CAPTION_TRANSLATIONS: [(&str, &str); 5] = [
    ("Yleiskuva sankarihautausmaasta", "Panorama of the cemetery"),
    (
        "Yksittäinen hauta risteineen muistolaattoineen",
        "Single grave with a cross and a brass",
    ),
    ("Muistomerkki", "Memorial"),
    ("Yleiskuva", "Panorama of the area"),
    ("Muu muistomerkki", "Other memorial"),
];

/// Derives the Finnish caption of a photo slot column.
///
/// `kuva_3_muistomerkki` has the caption `Muistomerkki`.
pub fn photo_caption(column: &str) -> String {
    let Some(description) = column
        .strip_prefix("kuva_")
        .and_then(|rest| rest.split_once('_'))
        .map(|(_, description)| description)
    else {
        return String::new();
    };
    let mut chars = description.chars().map(|c| if c == '_' { ' ' } else { c });
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Translates a Finnish photo caption to English, if it is a known caption.
pub fn translate_caption(caption_fi: &str) -> Option<&'static str> {
    CAPTION_TRANSLATIONS
        .iter()
        .find(|(fi, _)| *fi == caption_fi)
        .map(|(_, en)| *en)
}
