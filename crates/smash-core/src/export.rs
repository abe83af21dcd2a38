//! Flat CSV export of a character moveset

use crate::error::{Error, Result};
use crate::moveset::CharacterMoveset;
use crate::record::MoveRecord;
use std::io::Write;
use std::path::Path;

const HEADER: &[&str] = &[
    "group",
    "part",
    "kind",
    "modifier",
    "hitbox_active",
    "intangibility",
    "faf",
    "base_dmg",
    "angle",
    "bkb_wbkb",
    "kbg",
    "landing_lag",
    "autocancel",
    "weight_dependent",
];

/// Write one CSV row per move part; specials are listed by slot name
pub fn write_csv<W: Write>(moveset: &CharacterMoveset, writer: W) -> std::result::Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for (group, entry) in &moveset.moveset.groups {
        for (idx, record) in entry.parts().iter().enumerate() {
            csv_writer.write_record(record_row(group, idx + 1, record))?;
            rows += 1;
        }
    }
    for slot in &moveset.moveset.specials {
        let group = if slot.label.is_empty() {
            slot.kind.name().to_string()
        } else {
            format!("{} ({})", slot.kind.name(), slot.label)
        };
        for (idx, record) in slot.parts.iter().enumerate() {
            csv_writer.write_record(record_row(&group, idx + 1, record))?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Export a moveset to a CSV file, returning the number of data rows
pub fn export_csv<P: AsRef<Path>>(moveset: &CharacterMoveset, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(moveset, std::io::BufWriter::new(file)).map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

fn record_row(group: &str, part: usize, record: &MoveRecord) -> Vec<String> {
    let mut row = vec![String::new(); HEADER.len()];
    row[0] = group.to_string();
    row[1] = part.to_string();
    row[2] = record.kind().to_string();
    row[3] = record.modifier().unwrap_or_default().to_string();

    match record {
        MoveRecord::Attack(d) | MoveRecord::Special(d) => {
            row[4] = d.hitbox_active.clone();
            row[6] = d.faf.clone();
            row[7] = d.base_dmg.clone();
            row[8] = d.angle.clone();
            row[9] = d.bkb_wbkb.clone();
            row[10] = d.kbg.clone();
        }
        MoveRecord::Aerial(d) => {
            row[4] = d.hitbox_active.clone();
            row[6] = d.faf.clone();
            row[7] = d.base_dmg.clone();
            row[8] = d.angle.clone();
            row[9] = d.bkb_wbkb.clone();
            row[10] = d.kbg.clone();
            row[11] = d.landing_lag.clone();
            row[12] = d.autocancel.clone();
        }
        MoveRecord::Throw(d) => {
            row[7] = d.base_dmg.clone();
            row[8] = d.angle.clone();
            row[9] = d.bkb_wbkb.clone();
            row[10] = d.kbg.clone();
            row[13] = d.weight_dependent.to_string();
        }
        MoveRecord::Grab(d) => {
            row[4] = d.hitbox_active.clone();
            row[6] = d.faf.clone();
        }
        MoveRecord::Defensive(d) => {
            row[5] = d.intangibility.clone();
            row[6] = d.faf.clone();
        }
    }
    row
}
