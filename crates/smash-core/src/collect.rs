//! Batch extraction: one character after another, failures skipped
//!
//! Every run leaves a report behind so an operator can see which characters
//! were written and why the others were not.

use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::scanner::TableSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the run report inside the output directory
pub const REPORT_FILE: &str = "_report.json";

/// A character that could not be extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub character: String,
    pub stage: Stage,
    pub message: String,
}

/// Where in the pipeline a character failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fetch,
    Build,
    Save,
}

/// Outcome of an extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub output_dir: PathBuf,
    /// Files written, in processing order
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl ExtractionReport {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            output_dir: output_dir.into(),
            written: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Load a report from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the report to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, character: &str, stage: Stage, err: &Error) {
        log::error!("{} failed at {:?} stage: {}", character, stage, err);
        self.failures.push(Failure {
            character: character.to_string(),
            stage,
            message: err.to_string(),
        });
    }
}

/// Extract and persist every character, in order.
///
/// A character that fails at any stage is logged and recorded in the
/// report; the remaining characters still run. The report is written to
/// [`REPORT_FILE`] in `output_dir`.
pub fn collect_all<S: TableSource>(
    source: &S,
    extractor: &Extractor,
    characters: &[String],
    output_dir: &Path,
) -> Result<ExtractionReport> {
    fs::create_dir_all(output_dir)?;
    let mut report = ExtractionReport::new(output_dir);

    for character in characters {
        log::info!("extracting {}", character);

        let tables = match source.fetch(character) {
            Ok(tables) => tables,
            Err(e) => {
                report.fail(character, Stage::Fetch, &e);
                continue;
            }
        };

        let moveset = match extractor.build_moveset(&tables, character) {
            Ok(m) => m,
            Err(e) => {
                report.fail(character, Stage::Build, &e);
                continue;
            }
        };

        match moveset.save_to_dir(output_dir) {
            Ok(path) => {
                log::info!("wrote {}", path.display());
                report.written.push(path);
            }
            Err(e) => report.fail(character, Stage::Save, &e),
        }
    }

    report.finished_at = Some(Utc::now());
    report.save(output_dir.join(REPORT_FILE))?;
    Ok(report)
}
