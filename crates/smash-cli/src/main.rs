//! Smash Aid CLI
//!
//! Command-line tool for extracting character movesets from scraped tables
//! and narrating their frame data.

use clap::{Parser, Subcommand};
use smash_core::{
    answer, classify, collect_all, export_csv, narrate, scan_dumps, DumpSource, ExtractionRules,
    Extractor, MoveQuery, MovesetStore, SpecialKind,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smash-cli")]
#[command(about = "Smash frame data extraction and narration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the table dumps found under the input roots
    Scan {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,
    },

    /// Build one character's moveset and print it as JSON
    Extract {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// Character to extract
        #[arg(short, long)]
        character: String,

        /// Extraction rules file (JSON); built-in rules if omitted
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Extract every character found and write one JSON file each
    Collect {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// Output directory for movesets
        #[arg(short, long)]
        output: PathBuf,

        /// Only these characters (default: every dump found)
        #[arg(short, long)]
        character: Vec<String>,

        /// Extraction rules file (JSON); built-in rules if omitted
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Answer a character/move question from stored movesets
    Narrate {
        /// Directory of stored movesets
        #[arg(short, long)]
        store: PathBuf,

        /// Character name, as spoken
        #[arg(short, long)]
        character: Option<String>,

        /// Move name (e.g. "up smash", "neutral special")
        #[arg(short, long = "move")]
        move_key: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a stored character's move groups and specials
    Show {
        /// Directory of stored movesets
        #[arg(short, long)]
        store: PathBuf,

        /// Character name
        #[arg(short, long)]
        character: String,

        /// Narrate every move instead of listing names
        #[arg(short, long)]
        verbose: bool,
    },

    /// Export a stored character's moveset to CSV
    Export {
        /// Directory of stored movesets
        #[arg(short, long)]
        store: PathBuf,

        /// Character name
        #[arg(short, long)]
        character: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Classify a raw move label
    Classify {
        /// Labels as they appear in the tables
        #[arg(required = true)]
        label: Vec<String>,
    },

    /// Write the built-in extraction rules as an editable template
    CreateRules {
        /// Output path for the rules file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> smash_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { root } => cmd_scan(&root),
        Commands::Extract {
            root,
            character,
            rules,
        } => cmd_extract(&root, &character, rules.as_ref()),
        Commands::Collect {
            root,
            output,
            character,
            rules,
        } => cmd_collect(&root, &output, character, rules.as_ref()),
        Commands::Narrate {
            store,
            character,
            move_key,
            json,
        } => cmd_narrate(&store, character, move_key, json),
        Commands::Show {
            store,
            character,
            verbose,
        } => cmd_show(&store, &character, verbose),
        Commands::Export {
            store,
            character,
            output,
        } => cmd_export(&store, &character, &output),
        Commands::Classify { label } => cmd_classify(&label),
        Commands::CreateRules { output } => cmd_create_rules(&output),
    }
}

fn load_rules(path: Option<&PathBuf>) -> smash_core::Result<ExtractionRules> {
    match path {
        Some(path) => {
            log::info!("using rules from {}", path.display());
            ExtractionRules::load(path)
        }
        None => Ok(ExtractionRules::default()),
    }
}

fn cmd_scan(roots: &[PathBuf]) -> smash_core::Result<()> {
    let result = scan_dumps(roots)?;

    println!("Scanned {} root(s):", result.roots.len());
    for root in &result.roots {
        println!("  {}", root.display());
    }
    println!();
    println!("Found {} dumps:", result.dumps.len());
    for dump in &result.dumps {
        println!("  {} ({})", dump.key, dump.path.display());
    }

    Ok(())
}

fn cmd_extract(roots: &[PathBuf], character: &str, rules: Option<&PathBuf>) -> smash_core::Result<()> {
    let source = DumpSource::new(scan_dumps(roots)?);
    let dump = source.load(character)?;
    let extractor = Extractor::new(load_rules(rules)?);

    let moveset = extractor.build_moveset(&dump.tables, &dump.character)?;
    println!("{}", serde_json::to_string_pretty(&moveset)?);

    Ok(())
}

fn cmd_collect(
    roots: &[PathBuf],
    output: &PathBuf,
    characters: Vec<String>,
    rules: Option<&PathBuf>,
) -> smash_core::Result<()> {
    let source = DumpSource::new(scan_dumps(roots)?);
    let extractor = Extractor::new(load_rules(rules)?);

    // Use the display name recorded in each dump so output files match it
    let characters = if characters.is_empty() {
        source
            .scan()
            .dumps
            .iter()
            .map(|d| match source.load(&d.key) {
                Ok(dump) => dump.character,
                Err(_) => d.key.clone(),
            })
            .collect()
    } else {
        characters
    };

    println!("Extracting {} character(s)", characters.len());
    let report = collect_all(&source, &extractor, &characters, output)?;

    println!();
    println!("Extraction complete:");
    println!("  {} files written to {}", report.written.len(), output.display());

    if !report.is_clean() {
        println!("\nFailures ({}):", report.failures.len());
        for failure in &report.failures {
            println!("  {} [{:?}]: {}", failure.character, failure.stage, failure.message);
        }
    }

    Ok(())
}

fn cmd_narrate(
    store: &PathBuf,
    character: Option<String>,
    move_key: Option<String>,
    json: bool,
) -> smash_core::Result<()> {
    let store = MovesetStore::new(store);
    let query = MoveQuery {
        character,
        move_key: move_key.map(|m| m.to_lowercase()),
    };
    let response = answer(&store, &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.title);
        println!("{}", response.speech);
    }

    Ok(())
}

fn cmd_show(store: &PathBuf, character: &str, verbose: bool) -> smash_core::Result<()> {
    let store = MovesetStore::new(store);
    let moveset = store.load(character)?;
    let name = moveset.character.as_str();

    println!("Character: {}", name);
    if !moveset.attributes.is_empty() {
        println!();
        println!("Attributes:");
        for (key, value) in &moveset.attributes {
            println!("  {}: {}", key, value);
        }
    }

    println!();
    println!("Moves ({}):", moveset.moveset.group_count());
    for (group, entry) in &moveset.moveset.groups {
        if verbose {
            match narrate(name, group, entry.parts()) {
                Ok(text) => println!("  {}", text.trim_end()),
                Err(e) => println!("  {}: <{}>", group, e),
            }
        } else {
            println!("  {} ({} parts)", group, entry.parts().len());
        }
    }

    println!();
    println!("Specials:");
    for kind in SpecialKind::ALL {
        let Some(slot) = moveset.moveset.special(kind) else {
            continue;
        };
        let label = if slot.label.is_empty() { "-" } else { slot.label.as_str() };
        println!("  {}: {} ({} parts)", kind.name(), label, slot.parts.len());
    }

    Ok(())
}

fn cmd_export(store: &PathBuf, character: &str, output: &PathBuf) -> smash_core::Result<()> {
    let store = MovesetStore::new(store);
    let moveset = store.load(character)?;
    let rows = export_csv(&moveset, output)?;

    println!("Exported {} rows to {}", rows, output.display());

    Ok(())
}

fn cmd_classify(labels: &[String]) -> smash_core::Result<()> {
    for label in labels {
        let token = classify(label);
        println!("{}\tgroup={}\tmodifier={}", label, token.group, token.modifier);
    }

    Ok(())
}

fn cmd_create_rules(output: &PathBuf) -> smash_core::Result<()> {
    let rules = ExtractionRules::default();
    rules.save(output)?;

    println!("Created rules file: {}", output.display());
    println!();
    println!("Edit the file to adjust per-character exceptions, then run:");
    println!("  smash-cli collect --root <dumps> --output <dir> --rules {}", output.display());

    Ok(())
}
