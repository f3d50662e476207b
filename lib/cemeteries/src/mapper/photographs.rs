use crate::error::MappingError;
use crate::mapper::mint;
use crate::vocab::{class, ns, size, source, Relation};
use oxrdf::{Graph, Literal, LiteralRef, NamedNodeRef, TripleRef};

/// Location of the full size renditions.
pub const LARGE_MEDIA_BASE: &str = "https://static.sotasampo.fi/photographs/cemeteries/3000x2000px/";
/// Location of the thumbnails.
pub const SMALL_MEDIA_BASE: &str = "https://static.sotasampo.fi/photographs/cemeteries/300x200px/";

/// Everything known about one photo of a cemetery.
#[derive(Clone, Debug)]
pub struct PhotoDescription<'a> {
    /// File name of the photo on the media server.
    pub filename: &'a str,
    /// The photographer, already converted into its literal form.
    pub photographer: Option<Literal>,
    pub camera_club: Option<&'a str>,
    /// The zero-padded cemetery number.
    pub cemetery_id: &'a str,
    pub cemetery: NamedNodeRef<'a>,
    /// The two digit number of the photo slot, e.g. `01`.
    pub slot_number: &'a str,
    pub caption_fi: &'a str,
    pub caption_en: Option<&'a str>,
}

/// The triples describing one photo.
#[derive(Clone, Debug, Default)]
pub struct PhotoEntities {
    /// The photograph and the photography event.
    pub photographs: Graph,
    /// The full size and thumbnail renditions.
    pub information_objects: Graph,
}

/// Creates the photograph, the photography event and the two renditions of a photo.
///
/// Identifiers only depend on the cemetery number and the slot, so mapping the same photo twice
/// yields the same triples.
pub fn create_photo_entities(
    photo: &PhotoDescription<'_>,
) -> Result<PhotoEntities, MappingError> {
    let key = format!("{}_{}", photo.cemetery_id, photo.slot_number);
    let large = mint(ns::MEDIA, &format!("cemetery_photo_lg_{key}"))?;
    let small = mint(ns::MEDIA, &format!("cemetery_photo_sm_{key}"))?;
    let photograph = mint(ns::PHOTOGRAPHS, &format!("cemetery_photo_{key}"))?;
    let photography = mint(ns::EVENTS, &format!("cemetery_photo_{key}"))?;

    let mut information_objects = Graph::new();
    for (rendition, base, size_marker, label_en, label_fi) in [
        (&large, LARGE_MEDIA_BASE, size::LARGE, "Full size", "Suuri"),
        (&small, SMALL_MEDIA_BASE, size::SMALL, "Thumbnail", "Pieni"),
    ] {
        let url = Literal::new_simple_literal(format!("{base}{}", photo.filename));
        information_objects.insert(TripleRef::new(rendition, Relation::ContentUrl, &url));
        information_objects.insert(TripleRef::new(rendition, Relation::Represents, &photograph));
        information_objects.insert(TripleRef::new(
            rendition,
            Relation::Type,
            class::INFORMATION_OBJECT,
        ));
        information_objects.insert(TripleRef::new(
            rendition,
            Relation::PrefLabel,
            LiteralRef::new_language_tagged_literal_unchecked(label_en, "en"),
        ));
        information_objects.insert(TripleRef::new(
            rendition,
            Relation::PrefLabel,
            LiteralRef::new_language_tagged_literal_unchecked(label_fi, "fi"),
        ));
        information_objects.insert(TripleRef::new(rendition, Relation::Size, size_marker));
    }

    let mut photographs = Graph::new();
    photographs.insert(TripleRef::new(&photograph, Relation::Type, class::PHOTOGRAPH));
    photographs.insert(TripleRef::new(&photograph, Relation::Represents, photo.cemetery));
    photographs.insert(TripleRef::new(&photograph, Relation::HasRepresentation, &large));
    photographs.insert(TripleRef::new(&photograph, Relation::HasRepresentation, &small));
    photographs.insert(TripleRef::new(
        &photograph,
        Relation::Description,
        LiteralRef::new_language_tagged_literal_unchecked(photo.caption_fi, "fi"),
    ));
    if let Some(caption_en) = photo.caption_en {
        photographs.insert(TripleRef::new(
            &photograph,
            Relation::Description,
            LiteralRef::new_language_tagged_literal_unchecked(caption_en, "en"),
        ));
    }
    photographs.insert(TripleRef::new(
        &photograph,
        Relation::Source,
        source::PHOTOGRAPHY_PROJECT,
    ));

    photographs.insert(TripleRef::new(&photography, Relation::Type, class::PHOTOGRAPHY));
    photographs.insert(TripleRef::new(&photography, Relation::HasCreated, &photograph));
    if let Some(photographer) = &photo.photographer {
        photographs.insert(TripleRef::new(
            &photography,
            Relation::CarriedOutBy,
            photographer,
        ));
    }
    if let Some(camera_club) = photo.camera_club {
        photographs.insert(TripleRef::new(
            &photography,
            Relation::CameraClub,
            LiteralRef::new_simple_literal(camera_club),
        ));
    }
    photographs.insert(TripleRef::new(
        &photography,
        Relation::Source,
        source::PHOTOGRAPHY_PROJECT,
    ));

    Ok(PhotoEntities {
        photographs,
        information_objects,
    })
}
