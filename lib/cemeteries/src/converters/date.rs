use crate::converters::ConvertedValue;
use chrono::NaiveDate;
use tracing::{debug, warn};

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d.%m.%Y"];

/// Converts a `DD/MM/YYYY` or `DD.MM.YYYY` cell to a calendar date.
///
/// Surrounding whitespace is ignored. Cells in any other shape are passed through unchanged.
pub fn convert_dates(raw: &str) -> ConvertedValue {
    if raw.is_empty() {
        return ConvertedValue::Text(String::new());
    }
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            debug!("Converted date: {raw} to {date}");
            return ConvertedValue::Date(date);
        }
    }
    warn!("Invalid value for date conversion: {raw}");
    ConvertedValue::Text(raw.to_owned())
}
