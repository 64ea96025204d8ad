use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use directus_typegen::diagnostics::GenerationDiagnostics;
use directus_typegen::{
    GenerateOptions, generate_from_snapshot, index_collections, resolve_relations,
};
use directus_typegen_core::SchemaSnapshot;

#[derive(Debug, Parser)]
#[command(name = "directus-typegen")]
#[command(about = "Generate TypeScript type declarations from a Directus schema snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate TypeScript declarations from a schema snapshot JSON file.
    Generate(GenerateArgs),
    /// Print a summary of the collections and relations in a snapshot.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Path to the schema snapshot JSON file, or '-' for stdin.
    #[arg(long)]
    input: PathBuf,
    /// Output path for the generated declarations (stdout when omitted).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Indentation width in spaces.
    #[arg(long, default_value_t = 2)]
    spaces: usize,
    /// Indent with a single tab character per level instead of spaces.
    #[arg(long)]
    tabs: bool,
    /// Append trailing semicolons to emitted lines.
    #[arg(long)]
    semicolons: bool,
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Path to the schema snapshot JSON file, or '-' for stdin.
    #[arg(long)]
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Inspect(args) => run_inspect(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    if args.spaces == 0 {
        return Err("--spaces must be at least 1".to_string());
    }

    let snapshot = read_snapshot(&args.input)?;
    let options = GenerateOptions {
        spaces: args.spaces,
        use_tabs: args.tabs,
        trailing_semicolons: args.semicolons,
    };

    let document = generate_from_snapshot(&snapshot, &options);
    for warning in &document.warnings {
        eprintln!("warning: {warning}");
    }

    match args.output {
        Some(path) => fs::write(&path, &document.text)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?,
        None => print!("{}", document.text),
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let snapshot = read_snapshot(&args.input)?;

    let mut collections = index_collections(&snapshot);
    let mut diagnostics = GenerationDiagnostics::default();
    resolve_relations(&mut collections, &snapshot.relations, &mut diagnostics);

    println!("Collections: {}", collections.len());
    for collection in collections.values() {
        let relations = collection
            .fields
            .iter()
            .filter(|field| field.relation.is_some())
            .count();
        let mut tags: Vec<&str> = Vec::new();
        if collection.is_system() {
            tags.push("system");
        }
        if collection.singleton {
            tags.push("singleton");
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };
        println!(
            "  {}  fields={} relations={}{suffix}",
            collection.name,
            collection.fields.len(),
            relations
        );
    }

    println!("Relation records: {}", snapshot.relations.len());
    println!("  resolved sides: {}", diagnostics.resolved_sides);
    println!("  dropped sides: {}", diagnostics.dropped_sides);
    println!("  malformed records: {}", diagnostics.malformed_records);

    for warning in diagnostics.warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

fn read_snapshot(input: &Path) -> Result<SchemaSnapshot, String> {
    let raw = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| format!("Failed to read stdin: {err}"))?;
        buffer
    } else {
        fs::read_to_string(input)
            .map_err(|err| format!("Failed to read '{}': {err}", input.display()))?
    };

    serde_json::from_str(&raw).map_err(|err| format!("Failed to parse schema snapshot: {err}"))
}
