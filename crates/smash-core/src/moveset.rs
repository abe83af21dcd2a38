//! Per-character moveset types and their on-disk form

use crate::error::{Error, Result};
use crate::record::MoveRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the four special slots are persisted
pub const SPECIALS_KEY: &str = "specials";

/// A move group: one record, or several parts in table order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveEntry {
    Single(MoveRecord),
    Parts(Vec<MoveRecord>),
}

impl MoveEntry {
    /// View the entry as a list of parts
    pub fn parts(&self) -> &[MoveRecord] {
        match self {
            MoveEntry::Single(record) => std::slice::from_ref(record),
            MoveEntry::Parts(parts) => parts,
        }
    }

    fn push(&mut self, record: MoveRecord) {
        match self {
            MoveEntry::Single(first) => {
                *self = MoveEntry::Parts(vec![first.clone(), record]);
            }
            MoveEntry::Parts(parts) => parts.push(record),
        }
    }
}

/// The four canonical special slots, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    #[serde(rename = "neutral special")]
    Neutral,
    #[serde(rename = "side special")]
    Side,
    #[serde(rename = "up special")]
    Up,
    #[serde(rename = "down special")]
    Down,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 4] = [
        SpecialKind::Neutral,
        SpecialKind::Side,
        SpecialKind::Up,
        SpecialKind::Down,
    ];

    /// Spoken name, e.g. "up special"
    pub fn name(self) -> &'static str {
        match self {
            SpecialKind::Neutral => "neutral special",
            SpecialKind::Side => "side special",
            SpecialKind::Up => "up special",
            SpecialKind::Down => "down special",
        }
    }

    /// Look up a slot by its spoken name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// One of a character's four specials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialSlot {
    /// Canonical slot
    #[serde(rename = "name")]
    pub kind: SpecialKind,
    /// Group label from the table (e.g. "fireball"), empty for aliased groups
    #[serde(rename = "otherName")]
    pub label: String,
    /// Parts in table order
    #[serde(rename = "value")]
    pub parts: Vec<MoveRecord>,
}

impl SpecialSlot {
    pub fn empty(kind: SpecialKind) -> Self {
        Self {
            kind,
            label: String::new(),
            parts: Vec::new(),
        }
    }
}

/// Move groups plus the special slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moveset {
    #[serde(flatten)]
    pub groups: BTreeMap<String, MoveEntry>,
    pub specials: Vec<SpecialSlot>,
}

impl Default for Moveset {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
            specials: SpecialKind::ALL.into_iter().map(SpecialSlot::empty).collect(),
        }
    }
}

impl Moveset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to its group; a second record turns the group into parts
    pub fn insert(&mut self, group: &str, record: MoveRecord) -> Result<()> {
        if group == SPECIALS_KEY {
            return Err(Error::ReservedGroup(group.to_string()));
        }
        match self.groups.get_mut(group) {
            Some(entry) => entry.push(record),
            None => {
                self.groups
                    .insert(group.to_string(), MoveEntry::Single(record));
            }
        }
        Ok(())
    }

    pub fn get(&self, group: &str) -> Option<&MoveEntry> {
        self.groups.get(group)
    }

    pub fn special(&self, kind: SpecialKind) -> Option<&SpecialSlot> {
        self.specials.iter().find(|s| s.kind == kind)
    }

    /// Number of move groups, not counting specials
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Everything known about one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterMoveset {
    pub character: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    pub moveset: Moveset,
}

impl CharacterMoveset {
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            attributes: BTreeMap::new(),
            moveset: Moveset::new(),
        }
    }

    /// File name this character is stored under
    pub fn file_name(&self) -> String {
        format!("{}.json", character_key(&self.character))
    }

    /// Load a moveset from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Write the moveset into `dir`, returning the file path
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(path)
    }
}

/// Normalize a character name into its storage key.
///
/// "Dr. Mario" -> "dr_mario", "Pac-Man" -> "pac_man", "R.O.B" -> "rob"
pub fn character_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name.trim().to_lowercase().chars() {
        match ch {
            ' ' | '-' | '_' => {
                if !key.ends_with('_') {
                    key.push('_');
                }
            }
            c if c.is_alphanumeric() => key.push(c),
            _ => {}
        }
    }
    key.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AttackData, DefensiveData};

    fn attack(active: &str, modifier: Option<&str>) -> MoveRecord {
        MoveRecord::Attack(AttackData {
            hitbox_active: active.to_string(),
            modifier: modifier.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_character_key() {
        assert_eq!(character_key("Mario"), "mario");
        assert_eq!(character_key("Dr. Mario"), "dr_mario");
        assert_eq!(character_key("Pac-Man"), "pac_man");
        assert_eq!(character_key("R.O.B"), "rob");
        assert_eq!(character_key("Rosalina And Luma"), "rosalina_and_luma");
        assert_eq!(character_key("  Bowser Jr "), "bowser_jr");
    }

    #[test]
    fn test_insert_accumulates_parts_in_order() {
        let mut moveset = Moveset::new();
        moveset.insert("jab", attack("2-3", Some("1"))).unwrap();
        assert!(matches!(moveset.get("jab"), Some(MoveEntry::Single(_))));

        moveset.insert("jab", attack("3-4", Some("2"))).unwrap();
        moveset.insert("jab", attack("5-6", Some("3"))).unwrap();

        let parts = moveset.get("jab").unwrap().parts();
        let mods: Vec<_> = parts.iter().map(|p| p.modifier()).collect();
        assert_eq!(mods, vec![Some("1"), Some("2"), Some("3")]);
    }

    #[test]
    fn test_insert_rejects_reserved_key() {
        let mut moveset = Moveset::new();
        assert!(matches!(
            moveset.insert(SPECIALS_KEY, attack("1", None)),
            Err(Error::ReservedGroup(_))
        ));
    }

    #[test]
    fn test_default_has_four_slots() {
        let moveset = Moveset::new();
        let kinds: Vec<_> = moveset.specials.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SpecialKind::ALL.to_vec());
        assert!(moveset.specials.iter().all(|s| s.parts.is_empty()));
    }

    #[test]
    fn test_json_shape() {
        let mut character = CharacterMoveset::new("Mario");
        character.moveset.insert("jab", attack("2-3", Some("1"))).unwrap();
        character.moveset.insert("jab", attack("3-4", Some("2"))).unwrap();
        character
            .moveset
            .insert(
                "spot dodge",
                MoveRecord::Defensive(DefensiveData {
                    intangibility: "3-17".into(),
                    faf: "27".into(),
                    modifier: None,
                }),
            )
            .unwrap();
        character.moveset.specials[0].label = "fireball".into();

        let json = serde_json::to_value(&character).unwrap();
        assert!(json["moveset"]["jab"].is_array());
        assert!(json["moveset"]["spot dodge"].is_object());
        assert_eq!(json["moveset"]["specials"][0]["name"], "neutral special");
        assert_eq!(json["moveset"]["specials"][0]["otherName"], "fireball");
        assert!(json["moveset"]["specials"][0]["value"].is_array());
        assert!(json.get("attributes").is_none());

        let back: CharacterMoveset = serde_json::from_value(json).unwrap();
        assert_eq!(back, character);
    }

    #[test]
    fn test_special_kind_names() {
        assert_eq!(SpecialKind::from_name("up special"), Some(SpecialKind::Up));
        assert_eq!(SpecialKind::from_name("up smash"), None);
    }
}
