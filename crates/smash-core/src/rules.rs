//! Per-character extraction rules
//!
//! The source pages are mostly uniform, but a handful of characters need
//! special treatment. Those exceptions live here as data so the extractor
//! and grouper stay character-agnostic.

use crate::error::{Error, Result};
use crate::moveset::character_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Exception tables consulted during extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRules {
    /// Characters whose pages have extra tables but no injected one
    #[serde(default)]
    pub offset_exceptions: Vec<String>,
    /// Special-table groups dropped entirely (joke rows)
    #[serde(default)]
    pub ignored_groups: Vec<String>,
    /// Special-table groups kept in the moveset but left out of the slots
    #[serde(default)]
    pub auxiliary_groups: Vec<String>,
    /// Per character: group names that together form one unlabeled special
    #[serde(default)]
    pub special_aliases: BTreeMap<String, Vec<Vec<String>>>,
    /// Per character: leading words that are modifiers, not move families
    #[serde(default)]
    pub label_prefixes: BTreeMap<String, Vec<String>>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut special_aliases = BTreeMap::new();
        special_aliases.insert(
            "samus".to_string(),
            vec![strings(&["homing missile", "super missile"])],
        );
        special_aliases.insert(
            "zero_suit_samus".to_string(),
            vec![strings(&["flip jump", "flip kick"])],
        );

        let mut label_prefixes = BTreeMap::new();
        label_prefixes.insert(
            "ryu".to_string(),
            strings(&["light", "medium", "heavy", "true"]),
        );
        label_prefixes.insert("mewtwo".to_string(), strings(&["partially charged", "fully charged"]));

        Self {
            offset_exceptions: strings(&["shulk", "bayonetta"]),
            ignored_groups: strings(&["shovel knight deconfirmed"]),
            auxiliary_groups: strings(&["final smash", "monado arts"]),
            special_aliases,
            label_prefixes,
        }
    }
}

impl ExtractionRules {
    /// Rules with every exception table empty
    pub fn empty() -> Self {
        Self {
            offset_exceptions: Vec::new(),
            ignored_groups: Vec::new(),
            auxiliary_groups: Vec::new(),
            special_aliases: BTreeMap::new(),
            label_prefixes: BTreeMap::new(),
        }
    }

    /// Load rules from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save rules to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn is_offset_exception(&self, character: &str) -> bool {
        let key = character_key(character);
        self.offset_exceptions.iter().any(|c| character_key(c) == key)
    }

    pub fn is_ignored(&self, group: &str) -> bool {
        self.ignored_groups.iter().any(|g| g == group)
    }

    pub fn is_auxiliary(&self, group: &str) -> bool {
        self.auxiliary_groups.iter().any(|g| g == group)
    }

    /// Whether `group` belongs to one of the character's alias sets
    pub fn is_special_alias(&self, character: &str, group: &str) -> bool {
        self.special_aliases
            .get(&character_key(character))
            .is_some_and(|sets| sets.iter().any(|set| set.iter().any(|g| g == group)))
    }

    /// Prefix words to demote for a character, empty if none
    pub fn prefixes_for(&self, character: &str) -> &[String] {
        self.label_prefixes
            .get(&character_key(character))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
