use crate::converters::NOT_APPLICABLE;
use tracing::{debug, warn};

/// Parses a legacy `DD.MM.SS[,direction]` coordinate into decimal degrees.
///
/// Components are separated by `.` or `,`, whitespace is ignored, and a hemisphere letter may
/// follow. The parser works on fixed character positions: once whitespace is removed, the
/// degree separator must sit at index 2 and the minute separator at index 5. Without an explicit
/// hemisphere, a leading value above 59 is taken as a northern latitude and a value below 30 as
/// an eastern longitude. Values from 30 to 59 keep an unset hemisphere and stay positive.
///
/// Returns `None` for empty or not-applicable cells and for cells not in the expected shape.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    if raw.is_empty() || raw == NOT_APPLICABLE {
        return None;
    }

    let mut chars: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if !matches!(chars.get(2), Some('.' | ',')) {
        warn!("Invalid value for coordinate conversion: {raw}");
        return None;
    }

    trim_trailing_periods(&mut chars);
    let explicit_hemisphere = match chars.last().map(char::to_ascii_uppercase) {
        Some(hemisphere @ ('N' | 'S' | 'E' | 'W')) => {
            chars.pop();
            trim_trailing_periods(&mut chars);
            Some(hemisphere)
        }
        _ => None,
    };
    if chars.len() < 6 {
        warn!("Coordinate is too short: {raw}");
        return None;
    }

    chars[2] = '\u{B0}';
    chars[5] = '\'';
    chars.push('"');
    let normalized: String = chars.into_iter().collect();
    let hemisphere = explicit_hemisphere.or_else(|| infer_hemisphere(&normalized));

    let mut parts = normalized
        .split(|c: char| !(c.is_alphanumeric() || c == '.'))
        .filter(|part| !part.is_empty());
    let (Some(degrees), Some(minutes), Some(seconds)) = (parts.next(), parts.next(), parts.next())
    else {
        warn!("Coordinate has missing components: {raw}");
        return None;
    };
    let seconds = drop_extra_fraction(seconds);

    match (
        degrees.parse::<f64>(),
        minutes.parse::<f64>(),
        seconds.parse::<f64>(),
    ) {
        (Ok(degrees), Ok(minutes), Ok(seconds)) => {
            let value = dms_to_decimal(degrees, minutes, seconds, hemisphere);
            if !value.is_finite() {
                warn!("Coordinate is not a finite number: {raw}");
                return None;
            }
            debug!("Converted coordinate: {raw} to {value}");
            Some(value)
        }
        _ => {
            warn!("Invalid value for coordinate conversion: {raw}");
            None
        }
    }
}

fn trim_trailing_periods(chars: &mut Vec<char>) {
    while chars.last() == Some(&'.') {
        chars.pop();
    }
}

/// Guesses the hemisphere from the leading two digits. Finnish latitudes are above 59, Finnish
/// longitudes below 30.
fn infer_hemisphere(normalized: &str) -> Option<char> {
    let leading: String = normalized.chars().take(2).collect();
    match leading.parse::<u32>() {
        Ok(value) if value > 59 => Some('N'),
        Ok(value) if value < 30 => Some('E'),
        _ => None,
    }
}

/// `30.5.2` is a data entry artifact, everything after the second period is dropped.
fn drop_extra_fraction(seconds: &str) -> &str {
    match seconds.match_indices('.').nth(1) {
        Some((index, _)) => &seconds[..index],
        None => seconds,
    }
}

fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, hemisphere: Option<char>) -> f64 {
    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    let value = (value * 1e8).round() / 1e8;
    match hemisphere {
        Some('S' | 'W') => -value,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_latitude_with_hemisphere() {
        assert_eq!(parse_coordinate("60.15.30 N"), Some(60.258_333_33));
    }

    #[test]
    fn parses_longitude_with_hemisphere() {
        let value = parse_coordinate("25.30.00 E").unwrap();
        assert!((value - 25.5).abs() < 1e-9);
    }

    #[test]
    fn southern_and_western_hemispheres_are_negative() {
        assert_eq!(parse_coordinate("60.15.30 S"), Some(-60.258_333_33));
        let value = parse_coordinate("25.30.00 W").unwrap();
        assert!((value + 25.5).abs() < 1e-9);
        let value = parse_coordinate("25.30.00w").unwrap();
        assert!((value + 25.5).abs() < 1e-9);
    }

    #[test]
    fn sentinels_are_absent() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("ei_ole"), None);
    }

    #[test]
    fn requires_separator_at_index_two() {
        assert_eq!(parse_coordinate("601530"), None);
        assert_eq!(parse_coordinate("6.15.30"), None);
        assert_eq!(parse_coordinate("60:15:30"), None);
    }

    #[test]
    fn accepts_commas_and_stray_whitespace() {
        assert_eq!(parse_coordinate("60,15,30"), Some(60.258_333_33));
        assert_eq!(parse_coordinate("60. 15. 30"), Some(60.258_333_33));
    }

    #[test]
    fn whitespace_alone_is_not_a_separator() {
        // Whitespace is removed before the separator position is checked.
        assert_eq!(parse_coordinate("60 15 30"), None);
    }

    #[test]
    fn ignores_trailing_periods() {
        assert_eq!(parse_coordinate("60.15.30.."), Some(60.258_333_33));
        assert_eq!(parse_coordinate("60.15.30."), Some(60.258_333_33));
    }

    #[test]
    fn infers_hemisphere_from_leading_degrees() {
        assert_eq!(parse_coordinate("61.00.00"), Some(61.0));
        let value = parse_coordinate("24.57.36").unwrap();
        assert!((value - 24.96).abs() < 1e-9);
    }

    #[test]
    fn ambiguous_degrees_keep_unset_hemisphere() {
        assert_eq!(infer_hemisphere("45\u{B0}00'00\""), None);
        assert_eq!(parse_coordinate("45.30.00"), Some(45.5));
    }

    #[test]
    fn drops_extra_fraction_of_seconds() {
        assert_eq!(drop_extra_fraction("30.5.2"), "30.5");
        assert_eq!(drop_extra_fraction("30.5"), "30.5");
        assert_eq!(parse_coordinate("60.15.36.0.5"), Some(60.26));
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(parse_coordinate("60.15.36.0"), Some(60.26));
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(parse_coordinate("60.ab.cd"), None);
        assert_eq!(parse_coordinate("60.1"), None);
    }

    #[test]
    fn non_finite_components_are_absent() {
        assert_eq!(parse_coordinate("60.15.inf"), None);
        assert_eq!(parse_coordinate("60.15.infinity N"), None);
        assert_eq!(parse_coordinate("60.15.NaN"), None);
        assert_eq!(parse_coordinate("60.inf.30"), None);
    }
}
