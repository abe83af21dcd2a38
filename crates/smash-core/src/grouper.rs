//! Special-move grouping
//!
//! A character's special table lists every special row in order, with
//! nothing marking where one special ends and the next begins. The grouper
//! walks the rows and starts a new slot whenever the group label changes.

use crate::classifier::MoveNameToken;
use crate::error::{Error, Result};
use crate::moveset::{SpecialKind, SpecialSlot};
use crate::record::MoveRecord;
use crate::rules::ExtractionRules;

/// A classified special row ready for grouping
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialRow {
    pub token: MoveNameToken,
    pub record: MoveRecord,
}

/// Apply the character's label fix-ups to a freshly classified token
pub fn apply_label_fixups(rules: &ExtractionRules, character: &str, token: &mut MoveNameToken) {
    for prefix in rules.prefixes_for(character) {
        if token.demote_prefix(prefix) {
            log::debug!(
                "{}: demoted '{}' into modifier of '{}'",
                character,
                prefix,
                token.group
            );
            break;
        }
    }
}

/// Partition special rows into the four canonical slots.
///
/// Rows must already have their label fix-ups applied. Slots that receive
/// no rows stay empty; a fifth distinct label is an error.
pub fn group_specials(
    rules: &ExtractionRules,
    character: &str,
    rows: &[SpecialRow],
) -> Result<Vec<SpecialSlot>> {
    let mut slots: Vec<SpecialSlot> = SpecialKind::ALL.into_iter().map(SpecialSlot::empty).collect();
    let mut current: Option<usize> = None;

    for row in rows {
        let group = row.token.group.as_str();
        if rules.is_ignored(group) || rules.is_auxiliary(group) {
            continue;
        }

        let label = if rules.is_special_alias(character, group) {
            ""
        } else {
            group
        };

        let index = match current {
            Some(i) if slots[i].label == label => i,
            _ => {
                let next = current.map_or(0, |i| i + 1);
                if next >= slots.len() {
                    return Err(Error::GroupingOverflow {
                        character: character.to_string(),
                        label: label.to_string(),
                    });
                }
                slots[next].label = label.to_string();
                current = Some(next);
                next
            }
        };

        let modifier = if label.is_empty() {
            format!("{} {}", row.token.group, row.token.modifier)
                .trim()
                .to_string()
        } else {
            row.token.modifier.clone()
        };
        slots[index].parts.push(row.record.with_modifier(&modifier));
    }

    Ok(slots)
}
