use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Upper case letters that occur in Finnish and Swedish surnames, plus the joining characters.
const NAME_CHARS: &str = r"A-Z\u{C5}\u{C4}\u{D6}\u{DC}\u{C9}\u{D3}\u{C1}/\-";

/// Surname (optionally followed by a former surname) and an optional `VON`, then first names.
#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static NAME_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"([{NAME_CHARS}]+(?:\s+\(?E(?:NT)?[\.\s]+[{NAME_CHARS}]+)?\)?)\s*(?:(VON))?,?\s*([{NAME_CHARS} \(\)0-9,.]*)"
    ))
    .expect("Invalid name pattern")
});

/// A former surname introduced by `E.` or `ENT.`, with or without parentheses.
#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static FORMER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"([{NAME_CHARS}]{{2}}) +\(?(E(?:NT)?[\.\s]+)([{NAME_CHARS}]+)\)?"
    ))
    .expect("Invalid former name pattern")
});

/// A person name split into its parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonName {
    pub first_names: String,
    /// The surname, including a lowercase article and a `(ent. X)` former surname.
    pub last_name: String,
    /// `"Surname, Firstnames"`, or only the surname if there are no first names.
    pub full_name: String,
}

/// Unifies the syntax of a surname-first name.
///
/// `"VIRTANEN E. NIEMINEN MATTI"` becomes `"Virtanen (ent. Nieminen), Matti"`. If the unified
/// name, read in the original word order, differs from the input, a warning is logged. The
/// unified name is returned either way.
pub fn convert_person_name(raw: &str) -> PersonName {
    let upper = raw.to_uppercase();
    let (last, article, first) = match NAME_SPLIT.captures(&upper) {
        Some(captures) => (
            captures.get(1).map_or("", |m| m.as_str()),
            captures.get(2).map(|m| m.as_str()),
            captures.get(3).map_or("", |m| m.as_str()),
        ),
        None => (upper.as_str(), None, ""),
    };

    let last = FORMER_NAME.replace_all(last, "${1} (ent. ${3})");
    let mut last_name = title_case(&last).replace("(Ent. ", "(ent. ");
    let first_names = title_case(first);
    if let Some(article) = article {
        last_name = format!("{} {last_name}", article.to_lowercase());
    }

    let full_name = if first_names.is_empty() {
        last_name.clone()
    } else {
        format!("{last_name}, {first_names}")
    };
    debug!("Name {raw} was unified to form {full_name}");

    let original_style = if first_names.is_empty() {
        last_name.clone()
    } else {
        format!("{last_name} {first_names}")
    };
    if original_style.to_lowercase() != raw.to_lowercase() {
        warn!("New name {original_style} differs from {raw}");
    }

    PersonName {
        first_names,
        last_name,
        full_name,
    }
}

/// Upper cases the first letter of every word and lower cases the rest. Any non-letter starts a
/// new word.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}
