//! Converters that turn raw cell strings into typed values.
//!
//! A converter never fails. Input it cannot make sense of is passed through unchanged (or, for
//! coordinates, becomes [`ConvertedValue::Absent`]) and a warning is logged.

mod cemetery_name;
mod coordinate;
mod date;
mod numeric;
mod person_name;
mod text;

pub use cemetery_name::{split_cemetery_name, CemeteryName};
pub use coordinate::parse_coordinate;
pub use date::convert_dates;
pub use numeric::{add_trailing_zeros, convert_int};
pub use person_name::{convert_person_name, PersonName};
pub use text::strip_dash;

use chrono::NaiveDate;
use oxrdf::vocab::xsd;
use oxrdf::Literal;

/// Marker for cells that do not apply to a cemetery.
pub const NOT_APPLICABLE: &str = "ei_ole";
/// The same marker as typed by hand in some rows.
pub const NOT_APPLICABLE_SPACED: &str = "ei ole";

/// Returns whether `raw` is one of the "no data" sentinels.
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || raw == NOT_APPLICABLE || raw == NOT_APPLICABLE_SPACED
}

/// The result of applying a [`Converter`] to a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertedValue {
    /// A plain string, either the raw value or a normalized form of it.
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Float(f64),
    /// The cell holds no usable value.
    Absent,
    /// A compound municipality name split into its parts.
    CemeteryName(CemeteryName),
}

impl ConvertedValue {
    /// Returns the literal representing this value, or `None` if nothing should be emitted.
    ///
    /// Empty text produces no literal.
    pub fn to_literal(&self) -> Option<Literal> {
        match self {
            ConvertedValue::Text(text) if text.is_empty() => None,
            ConvertedValue::Text(text) => Some(Literal::new_simple_literal(text)),
            ConvertedValue::Integer(value) => Some(Literal::from(*value)),
            ConvertedValue::Date(date) => Some(Literal::new_typed_literal(
                date.format("%Y-%m-%d").to_string(),
                xsd::DATE,
            )),
            ConvertedValue::Float(value) => {
                Some(Literal::new_typed_literal(value.to_string(), xsd::FLOAT))
            }
            ConvertedValue::Absent => None,
            ConvertedValue::CemeteryName(name) => {
                Some(Literal::new_simple_literal(&name.narc_name))
            }
        }
    }
}

/// Names one of the converters that a column of the mapping can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Converter {
    /// [`convert_int`]
    Integer,
    /// [`convert_dates`]
    Date,
    /// [`convert_person_name`], producing the canonical "Surname, Firstnames" form.
    PersonName,
    /// [`add_trailing_zeros`]
    TrailingZeros,
    /// [`strip_dash`]
    StripDash,
    /// [`parse_coordinate`]
    Coordinate,
    /// [`split_cemetery_name`]
    CemeteryName,
}

impl Converter {
    /// Applies the converter to a raw cell value.
    pub fn apply(self, raw: &str) -> ConvertedValue {
        match self {
            Converter::Integer => convert_int(raw),
            Converter::Date => convert_dates(raw),
            Converter::PersonName => ConvertedValue::Text(convert_person_name(raw).full_name),
            Converter::TrailingZeros => add_trailing_zeros(raw),
            Converter::StripDash => ConvertedValue::Text(strip_dash(raw).to_owned()),
            Converter::Coordinate => {
                parse_coordinate(raw).map_or(ConvertedValue::Absent, ConvertedValue::Float)
            }
            Converter::CemeteryName => ConvertedValue::CemeteryName(split_cemetery_name(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::LiteralRef;

    #[test]
    fn sentinels_are_missing() {
        assert!(is_missing(""));
        assert!(is_missing("ei_ole"));
        assert!(is_missing("ei ole"));
        assert!(!is_missing("ei"));
        assert!(!is_missing("-"));
    }

    #[test]
    fn literals_carry_their_datatype() {
        assert_eq!(
            ConvertedValue::Integer(42).to_literal().as_ref().map(Literal::as_ref),
            Some(LiteralRef::new_typed_literal("42", xsd::INTEGER))
        );
        assert_eq!(
            ConvertedValue::Date(NaiveDate::from_ymd_opt(1942, 6, 4).unwrap_or_default())
                .to_literal()
                .as_ref()
                .map(Literal::as_ref),
            Some(LiteralRef::new_typed_literal("1942-06-04", xsd::DATE))
        );
        assert_eq!(
            ConvertedValue::Float(25.5).to_literal().as_ref().map(Literal::as_ref),
            Some(LiteralRef::new_typed_literal("25.5", xsd::FLOAT))
        );
        assert_eq!(
            ConvertedValue::Text("Hietaniemi".to_owned())
                .to_literal()
                .as_ref()
                .map(Literal::as_ref),
            Some(LiteralRef::new_simple_literal("Hietaniemi"))
        );
    }

    #[test]
    fn empty_values_have_no_literal() {
        assert_eq!(ConvertedValue::Text(String::new()).to_literal(), None);
        assert_eq!(ConvertedValue::Absent.to_literal(), None);
    }

    #[test]
    fn converters_dispatch() {
        assert_eq!(Converter::TrailingZeros.apply("7"), ConvertedValue::Text("007".to_owned()));
        assert_eq!(Converter::StripDash.apply(" - "), ConvertedValue::Text(String::new()));
        assert_eq!(Converter::Coordinate.apply("ei_ole"), ConvertedValue::Absent);
        assert_eq!(Converter::Coordinate.apply("60.15.inf"), ConvertedValue::Absent);
        assert_eq!(
            Converter::PersonName.apply("VIRTANEN MATTI"),
            ConvertedValue::Text("Virtanen, Matti".to_owned())
        );
    }
}
