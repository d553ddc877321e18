//! # typetransfer
//!
//! CLI tool for generating JavaScript or TypeScript model files from
//! Rust type declarations.
//!
//! ## Usage
//!
//! ```bash
//! # Generate JavaScript models for the app.view namespace into wwwroot/js
//! typetransfer app.view wwwroot/js
//!
//! # Preview without writing files
//! typetransfer app.view wwwroot/js --dry-run
//!
//! # Use an explicit configuration file
//! typetransfer app.view wwwroot/js --config typetransfer.toml
//! ```

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use typetransfer_cli::{
    config::ConfigManager,
    error::{CliError, ParseError, ScanError},
    generator::ModelGenerator,
    parser::DeclParser,
    scanner::{find_manifest, SourceScanner},
    selector::NamespaceFilter,
    writer::FileWriter,
};

#[derive(Parser)]
#[command(name = "typetransfer")]
#[command(author, version, about = "Generate JavaScript/TypeScript model files from Rust types", long_about = None)]
struct Cli {
    /// Namespace prefix selecting the model types to generate
    namespace: Option<String>,

    /// Output directory, relative to the project root
    out_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preview changes without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (namespace, out_dir) = match (cli.namespace, cli.out_dir) {
        (Some(namespace), Some(out_dir)) => (namespace, out_dir),
        _ => {
            print_usage();
            return Ok(());
        }
    };

    let start = std::env::current_dir()?;
    let manifest = find_manifest(&start)
        .ok_or_else(|| CliError::Scan(ScanError::manifest_not_found(start)))?;
    // find_manifest returns a file path inside an existing directory.
    let project_root = manifest.parent().unwrap_or_else(|| std::path::Path::new("."));

    println!("{}", "Scanning for Rust source files...".cyan());

    let files = SourceScanner::new(project_root).scan()?;
    println!("  Found {} Rust file(s)", files.len().to_string().green());

    println!("{}", "Parsing type declarations...".cyan());

    let (universe, errors) = DeclParser::new().parse_files(&files);

    if !errors.is_empty() {
        println!("{} {} parse error(s):", "Warning:".yellow(), errors.len());
        for error in &errors {
            println!("  {}", format_parse_error(error));
        }
    }

    println!(
        "  Found {} type declaration(s)",
        universe.len().to_string().green()
    );

    println!("{}", "Generating model files...".cyan());

    let config = ConfigManager::load(cli.config.as_deref())?;
    let generator = ModelGenerator::new(config);
    let writer = FileWriter::new(cli.dry_run);
    let out_root = project_root.join(&out_dir);

    let outcome = generator.generate(
        &universe,
        &NamespaceFilter::Prefix(namespace),
        &out_root,
        &writer,
    )?;

    for (full, relative) in &outcome.artifacts {
        println!("{} : {}", full.display(), relative.display());
    }

    if writer.is_dry_run() {
        println!(
            "{} {} file(s) would be written",
            "[dry-run]".yellow(),
            outcome.artifacts.len()
        );
    } else {
        println!(
            "{} Generated {} model(s), {} enum(s)",
            "✓".green(),
            outcome.emitted_types,
            outcome.emitted_enums
        );
    }

    if outcome.skipped_collisions > 0 {
        println!(
            "{} {} type(s) skipped: output path already written",
            "Warning:".yellow(),
            outcome.skipped_collisions
        );
    }

    Ok(())
}

/// Print name, version and invocation shape when arguments are missing.
fn print_usage() {
    println!(
        "{} {}",
        env!("CARGO_PKG_NAME").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Usage: typetransfer <NAMESPACE> <OUT_DIR> [--dry-run] [--config <FILE>]");
    println!();
    println!("Example: typetransfer app.view wwwroot/js");
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

/// Format a parse error for display.
fn format_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::Syntax { file, message } => {
            format!("{}: {}", file.display(), message)
        }
        ParseError::Io { file, source } => {
            format!("{}: {}", file.display(), source)
        }
    }
}
