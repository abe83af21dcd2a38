// tests/pipeline.rs
use smash_core::{
    answer, collect_all, scan_dumps, DumpSource, ExtractionRules, Extractor, MoveQuery,
    MovesetStore, RawRow, RawTable, TableDump,
};
use std::path::Path;

fn row(label: &str, cells: &[&str]) -> RawRow {
    RawRow::new(label, cells.iter().map(|s| s.to_string()).collect())
}

fn caption() -> RawRow {
    RawRow {
        headers: vec!["Move".into(), "Hitbox Active".into(), "FAF".into()],
        cells: Vec::new(),
    }
}

fn write_mario(dir: &Path) {
    let dump = TableDump {
        character: "Mario".into(),
        tables: vec![
            RawTable::new(vec![row("Weight", &["98"])]),
            // injected table between attributes and ground moves
            RawTable::new(vec![row("Changes", &["buffed"])]),
            RawTable::new(vec![
                caption(),
                row("Jab 1", &["2-3", "-", "2.2", "361", "0/25", "15"]),
                row("Jab 2", &["3-4", "19", "1.7", "361", "0/25", "15"]),
                row("Ftilt", &["5-7", "30", "7", "361", "8/0", "100"]),
                row("Usmash", &["9-13", "44", "14", "96", "32/0", "97"]),
                row("Dthrow", &["No", "5", "70", "60/0", "50", "-"]),
                row("Spotdodge", &["3-17", "27", "-", "-", "-", "-"]),
            ]),
            RawTable::new(vec![
                caption(),
                row("Uair", &["4-8", "30", "7", "75", "15/0", "130", "6", "1-2, 25>"]),
            ]),
            RawTable::new(vec![
                caption(),
                row("Fireball", &["17-67", "45", "5", "361", "25/0", "10"]),
                row("Cape", &["12-15", "36", "7", "110", "35/0", "50"]),
                row("Super Jump Punch (Hit 1)", &["3", "-", "5", "80", "35/0", "100"]),
                row("Super Jump Punch (Hits 2-6)", &["4-9", "-", "0.6", "365", "100/0", "100"]),
                row("Super Jump Punch (Last Hit)", &["12", "58", "3", "50", "70/0", "140"]),
                row("FLUDD", &["Max Charge: Frame 98", "-", "-", "-", "-", "-"]),
            ]),
        ],
    };
    dump.save(dir.join("mario.json")).unwrap();
}

fn write_broken_luigi(dir: &Path) {
    let dump = TableDump {
        character: "Luigi".into(),
        tables: vec![
            RawTable::default(),
            RawTable::new(vec![row("Jab 1", &["2-3", "17"])]),
            RawTable::default(),
            RawTable::default(),
        ],
    };
    dump.save(dir.join("luigi.json")).unwrap();
}

#[test]
fn extract_store_and_answer() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_mario(input.path());
    write_broken_luigi(input.path());

    let source = DumpSource::new(scan_dumps(&[input.path()]).unwrap());
    let extractor = Extractor::new(ExtractionRules::default());
    let characters = vec!["Luigi".to_string(), "Mario".to_string()];
    let report = collect_all(&source, &extractor, &characters, output.path()).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].character, "Luigi");

    let store = MovesetStore::new(output.path());
    assert_eq!(store.characters().unwrap(), vec!["mario".to_string()]);

    let ftilt = answer(&store, &MoveQuery::new("mario", "forward tilt"));
    assert_eq!(ftilt.title, "Mario's Forward Tilt");
    assert!(ftilt
        .speech
        .starts_with("Mario's forward tilt is active frames 5 to 7. Mario can act on frame 30."));

    let jab = answer(&store, &MoveQuery::new("mario", "jab"));
    assert!(jab.speech.starts_with(
        "Mario's jab has 2 parts. 1 is active frames 2 to 3. 2 is active frames 3 to 4. Mario can act on frame 19."
    ));

    let up_b = answer(&store, &MoveQuery::new("mario", "up special"));
    assert_eq!(up_b.title, "Mario's Up Special, Super Jump Punch,");
    assert!(up_b.speech.starts_with(
        "Mario's up special, Super Jump Punch, has 3 parts. hit 1 is active frame 3. \
         hits 2 to 6 are active frames 4 to 9. last hit is active frame 12. Mario can act on frame 58."
    ));

    let fludd = answer(&store, &MoveQuery::new("mario", "down special"));
    assert!(fludd
        .speech
        .starts_with("down special, Fludd, is active Max Charge: Frame 98. "));

    let dthrow = answer(&store, &MoveQuery::new("mario", "down throw"));
    assert!(dthrow
        .speech
        .starts_with("Mario's down throw is  not weight dependent. "));

    let missing = answer(&store, &MoveQuery::new("mario", "taunt"));
    assert_eq!(missing.title, "Please try again");

    let luigi = answer(&store, &MoveQuery::new("luigi", "jab"));
    assert_eq!(luigi.speech, "My B. I can't find any information about luigi.");
}
