//! smash-core: Core library for Smash frame-data movesets
//!
//! This library provides functionality to:
//! - Classify raw move labels into move groups and modifiers
//! - Build typed move records from scraped table rows
//! - Assemble per-character movesets, including the four special slots
//! - Narrate frame data as spoken English
//! - Persist, look up, and export movesets

pub mod classifier;
pub mod collect;
pub mod error;
pub mod export;
pub mod extract;
pub mod grouper;
pub mod moveset;
pub mod narrator;
pub mod query;
pub mod record;
pub mod rules;
pub mod scanner;
pub mod store;
pub mod table;

pub use classifier::{classify, MoveNameToken};
pub use collect::{collect_all, ExtractionReport, Failure, Stage};
pub use error::{Error, Result};
pub use export::{export_csv, write_csv};
pub use extract::{CountThresholdPolicy, Extractor, TableLayout, TableOffsetPolicy};
pub use grouper::{group_specials, SpecialRow};
pub use moveset::{character_key, CharacterMoveset, MoveEntry, Moveset, SpecialKind, SpecialSlot};
pub use narrator::narrate;
pub use query::{answer, answer_for, MoveQuery, Response};
pub use record::{MoveKind, MoveRecord};
pub use rules::ExtractionRules;
pub use scanner::{scan_dumps, DumpSource, TableSource};
pub use store::MovesetStore;
pub use table::{RawRow, RawTable, TableDump};
