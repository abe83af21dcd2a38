//! Directory of persisted character movesets

use crate::error::{Error, Result};
use crate::moveset::{character_key, CharacterMoveset};
use std::path::PathBuf;

/// Spoken forms that differ from the stored key
const SPOKEN_ALIASES: &[(&str, &str)] = &[("junior", "jr"), ("doctor", "dr")];

/// Read access to the movesets written by an extraction run
#[derive(Debug, Clone)]
pub struct MovesetStore {
    root: PathBuf,
}

impl MovesetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a character's moveset is stored at
    pub fn path_for(&self, character: &str) -> PathBuf {
        self.root.join(format!("{}.json", lookup_key(character)))
    }

    /// Load a character by the name a user would say
    pub fn load(&self, character: &str) -> Result<CharacterMoveset> {
        let path = self.path_for(character);
        if !path.exists() {
            return Err(Error::CharacterNotFound(character.to_string()));
        }
        log::debug!("loading {} from {}", character, path.display());
        CharacterMoveset::load(&path)
    }

    /// Stored character keys, sorted
    pub fn characters(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                // "_report.json" and friends are not characters
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if !stem.starts_with('_') {
                        keys.push(stem.to_string());
                    }
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Storage key for a spoken character name ("bowser junior" -> "bowser_jr")
pub fn lookup_key(character: &str) -> String {
    character_key(character)
        .split('_')
        .map(|word| {
            SPOKEN_ALIASES
                .iter()
                .find(|(spoken, _)| *spoken == word)
                .map_or(word, |(_, stored)| *stored)
        })
        .collect::<Vec<_>>()
        .join("_")
}
