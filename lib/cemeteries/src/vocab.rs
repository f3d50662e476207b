//! The fixed vocabulary of the cemetery graphs.
//!
//! Every predicate that ends up in one of the output graphs is a [`Relation`]. Classes, size
//! markers and provenance sources are plain constants in the style of [`oxrdf::vocab`].

use oxrdf::NamedNodeRef;
use std::fmt;

/// Namespace IRIs, also used as prefix bindings when serializing.
pub mod ns {
    pub const CIDOC: &str = "http://www.cidoc-crm.org/cidoc-crm/";
    pub const DC: &str = "http://purl.org/dc/terms/";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const BIOC: &str = "http://ldf.fi/schema/bioc/";
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const WGS84: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";
    pub const SCHEMA_ORG: &str = "http://schema.org/";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const WARSA_SCHEMA: &str = "http://ldf.fi/schema/warsa/";
    pub const CEMETERY_SCHEMA: &str = "http://ldf.fi/schema/warsa/places/cemeteries/";
    pub const PHOTOGRAPH_SCHEMA: &str = "http://ldf.fi/schema/warsa/photographs/";

    pub const CEMETERY_DATA: &str = "http://ldf.fi/warsa/places/cemeteries/";
    pub const EVENTS: &str = "http://ldf.fi/warsa/events/";
    pub const PHOTOGRAPHS: &str = "http://ldf.fi/warsa/photographs/";
    pub const MEDIA: &str = "http://ldf.fi/warsa/media/";
    pub const SOURCES: &str = "http://ldf.fi/warsa/sources/";
}

/// A predicate of the output graphs.
///
/// The set is closed: the mapping table, the photo entities and the schema all refer to these
/// variants instead of spelling out IRIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    // Identity and type
    Type,
    PrefLabel,
    CemeteryId,
    // Cemetery attributes
    Architect,
    NumberOfGraves,
    DateOfFoundation,
    MemorialUnveilingDate,
    Address,
    CameraClub,
    Memorial,
    MemorialSculptor,
    // Municipalities
    CurrentMunicipality,
    FormerMunicipality,
    OriginalNarcName,
    // Coordinates
    Latitude,
    Longitude,
    // Photographs and information objects
    ContentUrl,
    Represents,
    HasRepresentation,
    Size,
    Description,
    HasCreated,
    CarriedOutBy,
    // Provenance
    Source,
}

impl Relation {
    /// All relations of the vocabulary.
    pub const ALL: [Relation; 24] = [
        Relation::Type,
        Relation::PrefLabel,
        Relation::CemeteryId,
        Relation::Architect,
        Relation::NumberOfGraves,
        Relation::DateOfFoundation,
        Relation::MemorialUnveilingDate,
        Relation::Address,
        Relation::CameraClub,
        Relation::Memorial,
        Relation::MemorialSculptor,
        Relation::CurrentMunicipality,
        Relation::FormerMunicipality,
        Relation::OriginalNarcName,
        Relation::Latitude,
        Relation::Longitude,
        Relation::ContentUrl,
        Relation::Represents,
        Relation::HasRepresentation,
        Relation::Size,
        Relation::Description,
        Relation::HasCreated,
        Relation::CarriedOutBy,
        Relation::Source,
    ];

    /// Returns the IRI of the predicate.
    pub const fn iri(self) -> NamedNodeRef<'static> {
        NamedNodeRef::new_unchecked(match self {
            Relation::Type => "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            Relation::PrefLabel => "http://www.w3.org/2004/02/skos/core#prefLabel",
            Relation::CemeteryId => "http://ldf.fi/schema/warsa/places/cemeteries/cemetery_id",
            Relation::Architect => "http://ldf.fi/schema/warsa/places/cemeteries/architect",
            Relation::NumberOfGraves => {
                "http://ldf.fi/schema/warsa/places/cemeteries/number_of_graves"
            }
            Relation::DateOfFoundation => {
                "http://ldf.fi/schema/warsa/places/cemeteries/date_of_foundation"
            }
            Relation::MemorialUnveilingDate => {
                "http://ldf.fi/schema/warsa/places/cemeteries/memorial_unveiling_date"
            }
            Relation::Address => "http://ldf.fi/schema/warsa/places/cemeteries/address",
            Relation::CameraClub => "http://ldf.fi/schema/warsa/places/cemeteries/camera_club",
            Relation::Memorial => "http://ldf.fi/schema/warsa/places/cemeteries/memorial",
            Relation::MemorialSculptor => {
                "http://ldf.fi/schema/warsa/places/cemeteries/memorial_sculptor"
            }
            Relation::CurrentMunicipality => {
                "http://ldf.fi/schema/warsa/places/cemeteries/current_municipality"
            }
            Relation::FormerMunicipality => {
                "http://ldf.fi/schema/warsa/places/cemeteries/former_municipality"
            }
            Relation::OriginalNarcName => {
                "http://ldf.fi/schema/warsa/places/cemeteries/original_narc_name"
            }
            Relation::Latitude => "http://www.w3.org/2003/01/geo/wgs84_pos#lat",
            Relation::Longitude => "http://www.w3.org/2003/01/geo/wgs84_pos#long",
            Relation::ContentUrl => "http://schema.org/contentUrl",
            Relation::Represents => "http://www.cidoc-crm.org/cidoc-crm/P138_represents",
            Relation::HasRepresentation => {
                "http://www.cidoc-crm.org/cidoc-crm/P138i_has_representation"
            }
            Relation::Size => "http://ldf.fi/schema/warsa/photographs/size",
            Relation::Description => "http://purl.org/dc/terms/description",
            Relation::HasCreated => "http://www.cidoc-crm.org/cidoc-crm/P94_has_created",
            Relation::CarriedOutBy => "http://www.cidoc-crm.org/cidoc-crm/P14_carried_out_by",
            Relation::Source => "http://purl.org/dc/terms/source",
        })
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iri().fmt(f)
    }
}

impl From<Relation> for NamedNodeRef<'_> {
    fn from(relation: Relation) -> Self {
        relation.iri()
    }
}

/// Classes of the emitted entities.
pub mod class {
    use oxrdf::NamedNodeRef;

    pub const CEMETERY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/schema/warsa/Cemetery");
    pub const PHOTOGRAPH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/schema/warsa/Photograph");
    pub const PHOTOGRAPHY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/schema/warsa/Photography");
    pub const INFORMATION_OBJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.cidoc-crm.org/cidoc-crm/E73_Information_Object");
    pub const PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property");
}

/// Size categories of the photo renditions.
pub mod size {
    use oxrdf::NamedNodeRef;

    pub const LARGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/schema/warsa/photographs/lg");
    pub const SMALL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/schema/warsa/photographs/sm");
}

/// The sources the cemetery data is attributed to.
pub mod source {
    use oxrdf::NamedNodeRef;

    /// The cemetery photography project of the Finnish camera clubs.
    pub const PHOTOGRAPHY_PROJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/warsa/sources/cemetery_photography_project");
    /// The register of Finnish casualties of the wars 1939-1945.
    pub const CASUALTY_REGISTER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ldf.fi/warsa/sources/casualty_register");
}
