//! Pesagem CLI - classify pasted weighing records from the terminal.

mod cli;

use std::fs;
use std::io::Read;
use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use pesagem::{AnimalRef, BatchResult, Importer, ImporterConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&cli.input)?;
    let roster: Vec<AnimalRef> = serde_json::from_str(&fs::read_to_string(&cli.roster)?)?;

    let importer = Importer::with_config(ImporterConfig { today: cli.date });
    let result = importer.import(&text, &roster)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, std::io::Error> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn print_summary(result: &BatchResult) {
    println!(
        "{} lines: {} valid, {} pending, {} errors, {} header rows skipped",
        result.total_lines,
        result.valid.len().to_string().green(),
        result.pending.len().to_string().yellow(),
        result.errors.len().to_string().red(),
        result.skipped_headers.len(),
    );

    for valid in &result.valid {
        let scrotal = valid
            .scrotal_cm
            .map(|ce| format!(", CE {ce} cm"))
            .unwrap_or_default();
        println!(
            "  {} line {}: animal {} — {} kg{} on {}",
            "valid".green(),
            valid.line_number,
            valid.animal_id,
            valid.weight_kg,
            scrotal,
            valid.date,
        );
    }
    for pending in &result.pending {
        println!(
            "  {} line {}: unknown animal '{}{}' — {}",
            "pending".yellow(),
            pending.line_number,
            pending.series_code,
            pending
                .registration_number
                .as_deref()
                .map(|r| format!(" {r}"))
                .unwrap_or_default(),
            pending.raw,
        );
    }
    for error in &result.errors {
        println!(
            "  {} line {}: {} — {}",
            "error".red(),
            error.line_number,
            error.reason,
            error.raw,
        );
    }
}
