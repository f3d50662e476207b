/// A compound municipality cell split into its parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CemeteryName {
    /// The municipality the cemetery belongs to today.
    pub current_municipality: String,
    /// The municipality the cemetery belonged to before a merger, if any.
    pub former_municipality: Option<String>,
    /// The name under which the National Archives knows the cemetery.
    pub narc_name: String,
}

impl CemeteryName {
    /// The archival name in the form used as a registry key: trimmed and lowercased.
    pub fn normalized_narc_name(&self) -> String {
        self.narc_name.trim().to_lowercase()
    }
}

/// Splits `"current / former, archive name"` into its parts.
///
/// - Without a `" / "` separator, the current municipality is the text before the first comma
///   and the whole cell is the archival name.
/// - With a separator, the current municipality is the text before it, the former municipality
///   the text after it up to the first comma, and the archival name is everything after it.
pub fn split_cemetery_name(raw: &str) -> CemeteryName {
    match raw.split_once(" / ") {
        None => CemeteryName {
            current_municipality: before_comma(raw).to_owned(),
            former_municipality: None,
            narc_name: raw.to_owned(),
        },
        Some((current, former)) => {
            // Only the first two parts are used if the separator repeats.
            let former = former.split(" / ").next().unwrap_or(former);
            CemeteryName {
                current_municipality: current.to_owned(),
                former_municipality: Some(before_comma(former).to_owned()),
                narc_name: former.to_owned(),
            }
        }
    }
}

fn before_comma(value: &str) -> &str {
    value.split(',').next().unwrap_or(value)
}
