//! Move name classification
//!
//! Raw row labels on the source pages are inconsistent: abbreviations
//! ("Utilt"), parenthesized variants ("Ftilt (up angled)") and numbered
//! parts ("Jab 1") all occur. `classify` reduces every label to the move
//! family (`group`) plus whatever distinguishes this row (`modifier`).

use serde::{Deserialize, Serialize};

/// Abbreviations used on the source pages and their spoken names
const STANDARD_NAMES: &[(&str, &str)] = &[
    ("utilt", "up tilt"),
    ("dtilt", "down tilt"),
    ("ftilt", "forward tilt"),
    ("fsmash", "forward smash"),
    ("dsmash", "down smash"),
    ("usmash", "up smash"),
    ("airdodge", "air dodge"),
    ("spotdodge", "spot dodge"),
    ("dthrow", "down throw"),
    ("uthrow", "up throw"),
    ("bthrow", "back throw"),
    ("fthrow", "forward throw"),
    ("nair", "neutral air"),
    ("fair", "forward air"),
    ("dair", "down air"),
    ("uair", "up air"),
    ("bair", "back air"),
];

/// A classified move label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNameToken {
    /// Canonical move family (e.g. "forward tilt")
    pub group: String,
    /// Variant within the family (e.g. "up angled", "1"), possibly empty
    pub modifier: String,
}

impl MoveNameToken {
    /// Create a token from already-canonical parts
    pub fn new(group: impl Into<String>, modifier: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            modifier: modifier.into(),
        }
    }

    /// Move a leading prefix word of the group into the front of the modifier.
    ///
    /// Returns true if the prefix matched.
    pub fn demote_prefix(&mut self, prefix: &str) -> bool {
        let Some(rest) = self
            .group
            .strip_prefix(prefix)
            .and_then(|r| r.strip_prefix(' '))
        else {
            return false;
        };
        if rest.trim().is_empty() {
            return false;
        }
        self.group = rest.trim().to_string();
        self.modifier = join_words(prefix, &self.modifier);
        true
    }
}

/// Classify a raw row label into a group and modifier.
///
/// Never fails: labels that match no rule standardize to themselves. A
/// label with no name left after standardizing (ex. ".") gives an empty
/// group, which extraction skips.
pub fn classify(raw_label: &str) -> MoveNameToken {
    let label = collapse_whitespace(raw_label);

    let (mut candidate, mut modifier) = match label.find(" (") {
        Some(idx) => {
            let suffix: String = label[idx..]
                .to_lowercase()
                .chars()
                .filter(|c| !matches!(c, '(' | ')' | ','))
                .collect();
            (
                label[..idx].trim().to_lowercase(),
                collapse_whitespace(&suffix),
            )
        }
        None => (label.to_lowercase(), String::new()),
    };

    // ex. "jab 1", "jab 1 (early)"
    if let Some((head, last)) = candidate.rsplit_once(' ') {
        if !head.trim().is_empty() && last.parse::<i64>().is_ok() {
            modifier = join_words(&modifier, last);
            candidate = head.trim().to_string();
        }
    }

    MoveNameToken {
        group: standardize(&candidate),
        modifier,
    }
}

/// Lowercase, drop periods and expand known abbreviations
pub fn standardize(name: &str) -> String {
    let lower = collapse_whitespace(&name.to_lowercase().replace('.', ""));
    STANDARD_NAMES
        .iter()
        .find(|(short, _)| *short == lower)
        .map(|(_, long)| (*long).to_string())
        .unwrap_or(lower)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn join_words(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{} {}", first, second),
    }
}
