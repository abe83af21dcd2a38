//! Spoken descriptions of frame data
//!
//! All formatting here builds new strings from borrowed records; nothing
//! in a record is rewritten while it is being described.

use crate::error::{Error, Result};
use crate::record::MoveRecord;

/// Describe a move group in speakable English.
///
/// `character` and `move_label` are used verbatim, so callers pass them
/// the way they should be spoken (e.g. "Mario", "forward tilt").
pub fn narrate(character: &str, move_label: &str, records: &[MoveRecord]) -> Result<String> {
    let parts: Vec<&MoveRecord> = if records.len() > 1 {
        // Multi-hit entries sometimes list a part with no hitbox data
        records
            .iter()
            .filter(|r| r.hitbox_active().map_or(true, |w| !w.is_empty()))
            .collect()
    } else {
        records.iter().collect()
    };

    let body = match parts.as_slice() {
        [] => return Err(Error::EmptyMoveGroup(move_label.to_string())),
        [single] => describe_single(character, move_label, single)?,
        many => {
            let mut out = format!("{}'s {} has {} parts.", character, move_label, many.len());
            for (idx, part) in many.iter().enumerate() {
                let name = match part.modifier() {
                    Some(m) => m,
                    None if idx == 0 => "the first one",
                    None => "the next one",
                };
                out.push(' ');
                out.push_str(&describe_part(character, name, part)?);
            }
            out
        }
    };

    Ok(format!("{} {}", body, faf_sentence(character, &parts)))
}

fn describe_single(character: &str, move_label: &str, record: &MoveRecord) -> Result<String> {
    match record {
        MoveRecord::Throw(data) => Ok(throw_sentence(character, move_label, data.weight_dependent)),
        MoveRecord::Defensive(data) if !data.intangibility.is_empty() => Ok(format!(
            "{}'s {} is intangible frames {}.",
            character, move_label, data.intangibility
        )),
        _ => match record.hitbox_active() {
            Some(window) if !window.is_empty() => {
                Ok(active_sentence(character, move_label, window, true))
            }
            _ => Err(Error::UnrecognizedMoveShape(move_label.to_string())),
        },
    }
}

/// One part of a multi-part group, named by its modifier
fn describe_part(character: &str, name: &str, record: &MoveRecord) -> Result<String> {
    match record {
        MoveRecord::Throw(data) => Ok(throw_sentence(character, name, data.weight_dependent)),
        MoveRecord::Defensive(data) if !data.intangibility.is_empty() => {
            Ok(format!("{} is intangible frames {}.", name, data.intangibility))
        }
        _ => match record.hitbox_active() {
            Some(window) if !window.is_empty() => Ok(active_sentence(character, name, window, false)),
            _ => Err(Error::UnrecognizedMoveShape(name.to_string())),
        },
    }
}

/// "<move> is active frames 5 to 7." with the plural and possessive rules.
///
/// Free-text windows come back as-is, without the possessive or plural forms.
pub fn active_sentence(character: &str, move_name: &str, window: &str, verbose: bool) -> String {
    let first_word = window.split(' ').next().unwrap_or_default();
    if leading_integer(first_word).is_none() {
        // ex. "Max Charge: Frame 98"
        return format!("{} is active {}.", move_name, window);
    }

    let frames = if let Some((head, last)) = window.rsplit_once(',') {
        format!("frames {} and {}", head, last)
    } else if window.contains('-') {
        format!("frames {}", window)
    } else {
        format!("frame {}", window)
    };
    let mut sentence = format!("{} is active {}.", move_name, frames).replace('-', " to ");

    if move_name.contains("hit") && move_name.contains('-') {
        sentence = pluralize(&sentence);
    }

    if verbose {
        format!("{}'s {}", character, sentence)
    } else {
        sentence
    }
}

fn throw_sentence(character: &str, move_name: &str, weight_dependent: bool) -> String {
    let not = if weight_dependent { "" } else { " not " };
    format!("{}'s {} is {}weight dependent.", character, move_name, not)
}

fn faf_sentence(character: &str, parts: &[&MoveRecord]) -> String {
    parts
        .iter()
        .filter_map(|p| p.faf())
        .find(|faf| !faf.is_empty())
        .map(|faf| format!("{} can act on frame {}.", character, faf))
        .unwrap_or_default()
}

/// "the hit 1 to 3 is active" -> "the hits 1 to 3 are active"
fn pluralize(sentence: &str) -> String {
    sentence.replace(" is ", " are ").replace(" hit ", " hits ")
}

/// The integer at the start of `word`, if it starts with digits
fn leading_integer(word: &str) -> Option<u32> {
    let digits: String = word.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AerialData, AttackData, DefensiveData, GrabData, ThrowData};

    fn attack(active: &str, faf: &str, modifier: Option<&str>) -> MoveRecord {
        MoveRecord::Attack(AttackData {
            hitbox_active: active.to_string(),
            faf: faf.to_string(),
            modifier: modifier.map(str::to_string),
            ..Default::default()
        })
    }

    fn throw(weight_dependent: bool) -> MoveRecord {
        MoveRecord::Throw(ThrowData {
            weight_dependent,
            ..Default::default()
        })
    }

    #[test]
    fn test_single_range_with_faf() {
        let text = narrate("Mario", "forward tilt", &[attack("5-7", "30", None)]).unwrap();
        assert_eq!(
            text,
            "Mario's forward tilt is active frames 5 to 7. Mario can act on frame 30."
        );
    }

    #[test]
    fn test_comma_list_without_faf() {
        let text = narrate("Mario", "up smash", &[attack("4,9,14", "", None)]).unwrap();
        assert_eq!(text, "Mario's up smash is active frames 4,9 and 14. ");
    }

    #[test]
    fn test_single_frame() {
        let text = narrate("Fox", "jab", &[attack("2", "18", None)]).unwrap();
        assert_eq!(text, "Fox's jab is active frame 2. Fox can act on frame 18.");
    }

    #[test]
    fn test_ranges_inside_comma_list() {
        let text = narrate("Fox", "down smash", &[attack("6-7,10-12", "", None)]).unwrap();
        assert_eq!(text, "Fox's down smash is active frames 6 to 7 and 10 to 12. ");
    }

    #[test]
    fn test_free_text_window() {
        let text = narrate(
            "Mario",
            "down special",
            &[attack("Max Charge: Frame 98", "", None)],
        )
        .unwrap();
        assert_eq!(text, "down special is active Max Charge: Frame 98. ");
    }

    #[test]
    fn test_free_text_is_never_pluralized() {
        let parts = vec![
            attack("Max Charge: Frame 98", "", Some("hit 2-6")),
            attack("4", "", Some("release")),
        ];
        let text = narrate("Mario", "down special", &parts).unwrap();
        assert_eq!(
            text,
            "Mario's down special has 2 parts. \
             hit 2-6 is active Max Charge: Frame 98. \
             release is active frame 4. "
        );
    }

    #[test]
    fn test_multi_part_named_by_modifier() {
        let parts = vec![
            attack("3", "", Some("hit 1")),
            attack("4-9", "", Some("hit 2-6")),
            attack("12", "58", Some("last hit")),
        ];
        let text = narrate("Mario", "up special", &parts).unwrap();
        assert_eq!(
            text,
            "Mario's up special has 3 parts. \
             hit 1 is active frame 3. \
             hit 2 to 6 are active frames 4 to 9. \
             last hit is active frame 12. \
             Mario can act on frame 58."
        );
    }

    #[test]
    fn test_pluralize_only_swaps_inner_words() {
        assert_eq!(
            active_sentence("Mario", "hit 2-6", "4-9", false),
            "hit 2 to 6 are active frames 4 to 9."
        );
        assert_eq!(
            active_sentence("Mario", "late hit 2-3", "5", false),
            "late hits 2 to 3 are active frame 5."
        );
        assert_eq!(
            active_sentence("Mario", "up special hit 2-6", "4-9", true),
            "Mario's up special hits 2 to 6 are active frames 4 to 9."
        );
    }

    #[test]
    fn test_multi_part_fallback_names() {
        let parts = vec![attack("2-3", "17", None), attack("4", "20", None)];
        let text = narrate("Link", "jab", &parts).unwrap();
        assert_eq!(
            text,
            "Link's jab has 2 parts. the first one is active frames 2 to 3. \
             the next one is active frame 4. Link can act on frame 17."
        );
    }

    #[test]
    fn test_parts_without_hitbox_are_dropped() {
        let parts = vec![attack("10-14", "", Some("dive")), attack("", "", Some("latch"))];
        let text = narrate("Captain Falcon", "up special", &parts).unwrap();
        assert_eq!(text, "Captain Falcon's up special is active frames 10 to 14. ");
    }

    #[test]
    fn test_all_parts_dropped_is_error() {
        let parts = vec![attack("", "30", None), attack("", "", None)];
        assert!(matches!(
            narrate("Mario", "jab", &parts),
            Err(Error::EmptyMoveGroup(_))
        ));
        assert!(matches!(narrate("Mario", "jab", &[]), Err(Error::EmptyMoveGroup(_))));
    }

    #[test]
    fn test_single_without_window_is_unrecognized() {
        assert!(matches!(
            narrate("Mario", "jab", &[attack("", "30", None)]),
            Err(Error::UnrecognizedMoveShape(_))
        ));
        let dodge = MoveRecord::Defensive(DefensiveData::default());
        assert!(matches!(
            narrate("Mario", "spot dodge", &[dodge]),
            Err(Error::UnrecognizedMoveShape(_))
        ));
    }

    #[test]
    fn test_defensive() {
        let dodge = MoveRecord::Defensive(DefensiveData {
            intangibility: "3-17".into(),
            faf: "27".into(),
            modifier: None,
        });
        let text = narrate("Mario", "spot dodge", &[dodge]).unwrap();
        assert_eq!(
            text,
            "Mario's spot dodge is intangible frames 3-17. Mario can act on frame 27."
        );
    }

    #[test]
    fn test_throw_weight_dependence() {
        assert_eq!(
            narrate("Mario", "back throw", &[throw(true)]).unwrap(),
            "Mario's back throw is weight dependent. "
        );
        assert_eq!(
            narrate("Mario", "down throw", &[throw(false)]).unwrap(),
            "Mario's down throw is  not weight dependent. "
        );
    }

    #[test]
    fn test_dodges_kept_in_multi_part_groups() {
        let dodge = MoveRecord::Defensive(DefensiveData {
            intangibility: "2-15".into(),
            faf: "".into(),
            modifier: Some("roll".into()),
        });
        let parts = vec![dodge, attack("", "", Some("empty"))];
        let text = narrate("Mario", "forward roll", &parts).unwrap();
        assert_eq!(text, "Mario's forward roll is intangible frames 2-15. ");
    }

    #[test]
    fn test_grab_and_aerial_use_hitbox_window() {
        let grab = MoveRecord::Grab(GrabData {
            hitbox_active: "6-7".into(),
            faf: "30".into(),
            modifier: None,
        });
        assert_eq!(
            narrate("Mario", "grab", &[grab]).unwrap(),
            "Mario's grab is active frames 6 to 7. Mario can act on frame 30."
        );
        let nair = MoveRecord::Aerial(AerialData {
            hitbox_active: "3-27".into(),
            faf: "45".into(),
            ..Default::default()
        });
        assert_eq!(
            narrate("Mario", "neutral air", &[nair]).unwrap(),
            "Mario's neutral air is active frames 3 to 27. Mario can act on frame 45."
        );
    }

    #[test]
    fn test_narration_is_deterministic() {
        let parts = vec![attack("3", "", Some("hit 1")), attack("4-9", "40", Some("hit 2-6"))];
        let first = narrate("Mario", "up special", &parts).unwrap();
        let second = narrate("Mario", "up special", &parts).unwrap();
        assert_eq!(first, second);
        assert_eq!(parts[1].hitbox_active(), Some("4-9"));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("5-7"), Some(5));
        assert_eq!(leading_integer("14"), Some(14));
        assert_eq!(leading_integer("Max"), None);
        assert_eq!(leading_integer(""), None);
    }
}
