/// Treats a lone `-` as "no value".
///
/// Returns the empty string for such cells and the input unchanged otherwise.
pub fn strip_dash(raw: &str) -> &str {
    if raw.trim() == "-" {
        ""
    } else {
        raw
    }
}
