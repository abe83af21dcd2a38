//! Typed move records and the builders that create them from table cells

use crate::classifier::MoveNameToken;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Cells in a grounded-move table row
pub const GROUND_ROW_WIDTH: usize = 6;
/// Cells in an aerial table row
pub const AERIAL_ROW_WIDTH: usize = 8;
/// Cells in a special-move table row
pub const SPECIAL_ROW_WIDTH: usize = 6;

/// Record category, used for builder dispatch and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Attack,
    Aerial,
    Special,
    Throw,
    Grab,
    Defensive,
}

impl MoveKind {
    /// Pick the category for a ground-table row from its group name
    pub fn for_ground(group: &str) -> Self {
        Self::by_keyword(group).unwrap_or(MoveKind::Attack)
    }

    /// Pick the category for an aerial-table row from its group name
    pub fn for_aerial(group: &str) -> Self {
        Self::by_keyword(group).unwrap_or(MoveKind::Aerial)
    }

    fn by_keyword(group: &str) -> Option<Self> {
        if group.contains("throw") {
            Some(MoveKind::Throw)
        } else if group.contains("grab") {
            Some(MoveKind::Grab)
        } else if group.contains("dodge") || group.contains("roll") {
            Some(MoveKind::Defensive)
        } else {
            None
        }
    }

    /// Cells this kind reads, taken from the front of the row
    pub fn field_count(self) -> usize {
        match self {
            MoveKind::Aerial => 8,
            MoveKind::Attack | MoveKind::Special => 6,
            MoveKind::Throw => 5,
            MoveKind::Grab | MoveKind::Defensive => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Attack => "attack",
            MoveKind::Aerial => "aerial",
            MoveKind::Special => "special",
            MoveKind::Throw => "throw",
            MoveKind::Grab => "grab",
            MoveKind::Defensive => "defensive",
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hitting move data shared by grounded attacks and specials
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackData {
    pub hitbox_active: String,
    pub faf: String,
    pub base_dmg: String,
    pub angle: String,
    pub bkb_wbkb: String,
    pub kbg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AerialData {
    pub hitbox_active: String,
    pub faf: String,
    pub base_dmg: String,
    pub angle: String,
    pub bkb_wbkb: String,
    pub kbg: String,
    pub landing_lag: String,
    pub autocancel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThrowData {
    pub weight_dependent: bool,
    pub base_dmg: String,
    pub angle: String,
    pub bkb_wbkb: String,
    pub kbg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrabData {
    pub hitbox_active: String,
    pub faf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

/// Dodges and rolls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefensiveData {
    pub intangibility: String,
    pub faf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

/// One row of frame data, tagged by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveRecord {
    Attack(AttackData),
    Aerial(AerialData),
    Special(AttackData),
    Throw(ThrowData),
    Grab(GrabData),
    Defensive(DefensiveData),
}

impl MoveRecord {
    /// Build a record of the given kind from a row's data cells.
    ///
    /// `row_width` is the width of the table the row came from; the cell
    /// count must match it exactly. Throws, grabs and dodges read their
    /// fields from the front of the row, so they fit in any table.
    pub fn build(
        kind: MoveKind,
        token: &MoveNameToken,
        cells: &[String],
        row_width: usize,
    ) -> Result<Self> {
        let expected = row_width.max(kind.field_count());
        if cells.len() != expected {
            return Err(Error::RecordShape {
                kind: kind.as_str(),
                group: token.group.clone(),
                expected,
                found: cells.len(),
            });
        }

        let modifier = (!token.modifier.is_empty()).then(|| token.modifier.clone());
        let cell = |i: usize| cells[i].clone();

        let record = match kind {
            MoveKind::Attack | MoveKind::Special => {
                let data = AttackData {
                    hitbox_active: cell(0),
                    faf: cell(1),
                    base_dmg: cell(2),
                    angle: cell(3),
                    bkb_wbkb: cell(4),
                    kbg: cell(5),
                    modifier,
                };
                if kind == MoveKind::Special {
                    MoveRecord::Special(data)
                } else {
                    MoveRecord::Attack(data)
                }
            }
            MoveKind::Aerial => MoveRecord::Aerial(AerialData {
                hitbox_active: cell(0),
                faf: cell(1),
                base_dmg: cell(2),
                angle: cell(3),
                bkb_wbkb: cell(4),
                kbg: cell(5),
                landing_lag: cell(6),
                autocancel: cell(7),
                modifier,
            }),
            MoveKind::Throw => MoveRecord::Throw(ThrowData {
                weight_dependent: parse_weight_dependent(&token.group, &cells[0])?,
                base_dmg: cell(1),
                angle: cell(2),
                bkb_wbkb: cell(3),
                kbg: cell(4),
                modifier,
            }),
            MoveKind::Grab => MoveRecord::Grab(GrabData {
                hitbox_active: cell(0),
                faf: cell(1),
                modifier,
            }),
            MoveKind::Defensive => MoveRecord::Defensive(DefensiveData {
                intangibility: cell(0),
                faf: cell(1),
                modifier,
            }),
        };
        Ok(record)
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            MoveRecord::Attack(_) => MoveKind::Attack,
            MoveRecord::Aerial(_) => MoveKind::Aerial,
            MoveRecord::Special(_) => MoveKind::Special,
            MoveRecord::Throw(_) => MoveKind::Throw,
            MoveRecord::Grab(_) => MoveKind::Grab,
            MoveRecord::Defensive(_) => MoveKind::Defensive,
        }
    }

    /// The hitbox-active window, for kinds that have one
    pub fn hitbox_active(&self) -> Option<&str> {
        match self {
            MoveRecord::Attack(d) | MoveRecord::Special(d) => Some(&d.hitbox_active),
            MoveRecord::Aerial(d) => Some(&d.hitbox_active),
            MoveRecord::Grab(d) => Some(&d.hitbox_active),
            MoveRecord::Throw(_) | MoveRecord::Defensive(_) => None,
        }
    }

    /// First actionable frame, if the kind carries one
    pub fn faf(&self) -> Option<&str> {
        match self {
            MoveRecord::Attack(d) | MoveRecord::Special(d) => Some(&d.faf),
            MoveRecord::Aerial(d) => Some(&d.faf),
            MoveRecord::Grab(d) => Some(&d.faf),
            MoveRecord::Defensive(d) => Some(&d.faf),
            MoveRecord::Throw(_) => None,
        }
    }

    pub fn modifier(&self) -> Option<&str> {
        let modifier = match self {
            MoveRecord::Attack(d) | MoveRecord::Special(d) => &d.modifier,
            MoveRecord::Aerial(d) => &d.modifier,
            MoveRecord::Throw(d) => &d.modifier,
            MoveRecord::Grab(d) => &d.modifier,
            MoveRecord::Defensive(d) => &d.modifier,
        };
        modifier.as_deref().filter(|m| !m.is_empty())
    }

    /// Return a copy carrying a different modifier (empty clears it)
    pub fn with_modifier(&self, modifier: &str) -> Self {
        let value = (!modifier.is_empty()).then(|| modifier.to_string());
        let mut record = self.clone();
        match &mut record {
            MoveRecord::Attack(d) | MoveRecord::Special(d) => d.modifier = value,
            MoveRecord::Aerial(d) => d.modifier = value,
            MoveRecord::Throw(d) => d.modifier = value,
            MoveRecord::Grab(d) => d.modifier = value,
            MoveRecord::Defensive(d) => d.modifier = value,
        }
        record
    }
}

/// "Yes" means weight dependent, anything containing "No" means not
fn parse_weight_dependent(group: &str, value: &str) -> Result<bool> {
    if value == "Yes" {
        Ok(true)
    } else if value.contains("No") {
        Ok(false)
    } else {
        Err(Error::UnexpectedCell {
            field: "weight dependent",
            group: group.to_string(),
            value: value.to_string(),
        })
    }
}
