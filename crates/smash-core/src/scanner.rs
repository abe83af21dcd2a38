//! Discovery of scraped table dumps on disk

use crate::error::{Error, Result};
use crate::moveset::character_key;
use crate::table::{RawTable, TableDump};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A table dump found on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpFile {
    /// Storage key derived from the file stem (e.g. "dr_mario")
    pub key: String,
    /// Full path to the dump
    pub path: PathBuf,
}

/// Result of scanning directories for dumps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directories that were scanned
    pub roots: Vec<PathBuf>,
    /// Discovered dumps, sorted by key
    pub dumps: Vec<DumpFile>,
}

impl ScanResult {
    /// Find the dump for a character name
    pub fn find(&self, character: &str) -> Option<&DumpFile> {
        let key = character_key(character);
        self.dumps.iter().find(|d| d.key == key)
    }
}

/// Scan one or more directories for `*.json` table dumps.
///
/// When two roots hold a dump for the same character, the later root wins.
pub fn scan_dumps<P: AsRef<Path>>(roots: &[P]) -> Result<ScanResult> {
    let mut by_key: BTreeMap<String, PathBuf> = BTreeMap::new();

    for root in roots {
        for entry in WalkDir::new(root.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                by_key.insert(character_key(stem), path.to_path_buf());
            }
        }
    }

    Ok(ScanResult {
        roots: roots.iter().map(|r| r.as_ref().to_path_buf()).collect(),
        dumps: by_key
            .into_iter()
            .map(|(key, path)| DumpFile { key, path })
            .collect(),
    })
}

/// Where character tables come from
pub trait TableSource {
    /// Fetch the tables of a character page, in page order
    fn fetch(&self, character: &str) -> Result<Vec<RawTable>>;
}

/// Table source backed by dumps found with [`scan_dumps`]
#[derive(Debug, Clone)]
pub struct DumpSource {
    scan: ScanResult,
}

impl DumpSource {
    pub fn new(scan: ScanResult) -> Self {
        Self { scan }
    }

    pub fn scan(&self) -> &ScanResult {
        &self.scan
    }

    /// Load the full dump, including the character name recorded in it
    pub fn load(&self, character: &str) -> Result<TableDump> {
        let dump = self
            .scan
            .find(character)
            .ok_or_else(|| Error::DumpNotFound(character.to_string()))?;
        TableDump::load(&dump.path)
    }
}

impl TableSource for DumpSource {
    fn fetch(&self, character: &str) -> Result<Vec<RawTable>> {
        Ok(self.load(character)?.tables)
    }
}
