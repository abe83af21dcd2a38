//! Extraction of a character moveset from its scraped tables

use crate::classifier::{classify, MoveNameToken};
use crate::error::{Error, Result};
use crate::grouper::{apply_label_fixups, group_specials, SpecialRow};
use crate::moveset::CharacterMoveset;
use crate::record::{MoveKind, MoveRecord, AERIAL_ROW_WIDTH, GROUND_ROW_WIDTH, SPECIAL_ROW_WIDTH};
use crate::rules::ExtractionRules;
use crate::table::{RawRow, RawTable};

/// Number of semantic tables on a normal character page
pub const SEMANTIC_TABLE_COUNT: usize = 4;

/// Positions of the semantic tables within a page's table list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub attributes: usize,
    pub ground: usize,
    pub aerials: usize,
    pub specials: usize,
}

impl TableLayout {
    /// Layout with `extra` spurious tables after the attributes table
    pub fn with_offset(extra: usize) -> Self {
        Self {
            attributes: 0,
            ground: 1 + extra,
            aerials: 2 + extra,
            specials: 3 + extra,
        }
    }
}

/// Decides where the semantic tables sit on a page
pub trait TableOffsetPolicy {
    fn layout(&self, character: &str, tables: &[RawTable]) -> TableLayout;
}

/// Pages with more than four tables are assumed to carry one injected table
/// right after the attributes, unless the character is listed as an
/// exception.
#[derive(Debug, Clone)]
pub struct CountThresholdPolicy {
    rules: ExtractionRules,
}

impl CountThresholdPolicy {
    pub fn from_rules(rules: &ExtractionRules) -> Self {
        Self {
            rules: rules.clone(),
        }
    }
}

impl TableOffsetPolicy for CountThresholdPolicy {
    fn layout(&self, character: &str, tables: &[RawTable]) -> TableLayout {
        let exempt = self.rules.is_offset_exception(character);
        let extra = if tables.len() > SEMANTIC_TABLE_COUNT && !exempt {
            1
        } else {
            0
        };
        TableLayout::with_offset(extra)
    }
}

/// Builds character movesets from raw tables
pub struct Extractor {
    rules: ExtractionRules,
    policy: Box<dyn TableOffsetPolicy>,
}

impl Extractor {
    /// Create an extractor using the count-threshold table policy
    pub fn new(rules: ExtractionRules) -> Self {
        let policy = CountThresholdPolicy::from_rules(&rules);
        Self {
            rules,
            policy: Box::new(policy),
        }
    }

    /// Replace the table-offset policy
    pub fn with_policy(mut self, policy: impl TableOffsetPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the moveset for one character
    pub fn build_moveset(&self, tables: &[RawTable], character: &str) -> Result<CharacterMoveset> {
        let layout = self.policy.layout(character, tables);
        let table = |index: usize| {
            tables.get(index).ok_or_else(|| Error::MissingTable {
                character: character.to_string(),
                index,
                count: tables.len(),
            })
        };

        let mut result = CharacterMoveset::new(character);
        self.add_attributes(&mut result, table(layout.attributes)?);
        self.add_moves(
            &mut result,
            table(layout.ground)?,
            MoveKind::for_ground,
            GROUND_ROW_WIDTH,
        )?;
        self.add_moves(
            &mut result,
            table(layout.aerials)?,
            MoveKind::for_aerial,
            AERIAL_ROW_WIDTH,
        )?;
        self.add_specials(&mut result, table(layout.specials)?)?;

        log::debug!(
            "{}: {} groups, {} attributes",
            character,
            result.moveset.group_count(),
            result.attributes.len()
        );
        Ok(result)
    }

    fn add_attributes(&self, result: &mut CharacterMoveset, table: &RawTable) {
        for row in data_rows(table) {
            let name = row.label().to_lowercase();
            if let Some(value) = row.data_cells().into_iter().find(|c| !c.is_empty()) {
                result.attributes.insert(name, value);
            }
        }
    }

    fn add_moves(
        &self,
        result: &mut CharacterMoveset,
        table: &RawTable,
        kind_for: fn(&str) -> MoveKind,
        row_width: usize,
    ) -> Result<()> {
        for row in data_rows(table) {
            let token = classify(&row.label());
            if token.group.is_empty() {
                log::debug!("{}: skipping unnamed row '{}'", result.character, row.label());
                continue;
            }
            let kind = kind_for(&token.group);
            let record = MoveRecord::build(kind, &token, &row.data_cells(), row_width)?;
            result.moveset.insert(&token.group, record)?;
        }
        Ok(())
    }

    fn add_specials(&self, result: &mut CharacterMoveset, table: &RawTable) -> Result<()> {
        let character = result.character.clone();
        let mut rows = Vec::new();
        for row in data_rows(table) {
            let token = self.special_token(&character, row);
            if token.group.is_empty() {
                log::debug!("{}: skipping unnamed special row '{}'", character, row.label());
                continue;
            }
            if self.rules.is_ignored(&token.group) {
                log::debug!("{}: ignoring special row '{}'", character, token.group);
                continue;
            }
            let cells = row.data_cells();
            let record = MoveRecord::build(MoveKind::Special, &token, &cells, SPECIAL_ROW_WIDTH)?;
            result.moveset.insert(&token.group, record.clone())?;
            rows.push(SpecialRow { token, record });
        }
        result.moveset.specials = group_specials(&self.rules, &character, &rows)?;
        Ok(())
    }

    fn special_token(&self, character: &str, row: &RawRow) -> MoveNameToken {
        let mut token = classify(&row.label());
        apply_label_fixups(&self.rules, character, &mut token);
        token
    }
}

/// Rows that carry data: one header cell with a non-blank label
fn data_rows(table: &RawTable) -> impl Iterator<Item = &RawRow> {
    table
        .rows
        .iter()
        .filter(|row| !row.is_subheader() && !row.label().is_empty())
}
