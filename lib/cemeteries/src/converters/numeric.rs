use crate::converters::ConvertedValue;
use tracing::{debug, warn};

/// Converts a cell to an integer if possible.
///
/// An empty cell stays an empty string (it is *not* zero). Anything that is not a base-10 integer
/// is passed through unchanged, and so are values outside the `i64` range.
pub fn convert_int(raw: &str) -> ConvertedValue {
    if raw.is_empty() {
        return ConvertedValue::Text(String::new());
    }
    match raw.trim().parse::<i64>() {
        Ok(value) => {
            debug!("Converted int: {raw}");
            ConvertedValue::Integer(value)
        }
        Err(_) => {
            warn!("Invalid value for int conversion: {raw}");
            ConvertedValue::Text(raw.to_owned())
        }
    }
}

/// Renders an integer cell as a zero-padded, three digit string (`7` becomes `"007"`).
///
/// Only meaningful for cells that [`convert_int`] accepts. Other cells are passed through.
pub fn add_trailing_zeros(raw: &str) -> ConvertedValue {
    match convert_int(raw) {
        ConvertedValue::Integer(value) => ConvertedValue::Text(format!("{value:03}")),
        other => other,
    }
}
