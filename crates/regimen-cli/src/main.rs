//! Regimen command-line interface
//!
//! Evaluates treatment episode rules over observation fixtures: one patient
//! or a whole cohort, from a JSON observation file and a JSON concept map.

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use colored::Colorize;
use regimen::model::PatientRecord;
use regimen::types::ConceptId;
use regimen::{ConceptDictionary, EpisodeEngine, InMemorySource, PatientId, rules};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Treatment episode report tool
#[derive(Parser)]
#[command(name = "regimen")]
#[command(author, version, about = "Treatment episode reports from observation streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one rule for one patient
    Evaluate {
        /// JSON file of patient observation records
        observations: PathBuf,
        /// Rule name (see `rules`)
        #[arg(short, long)]
        rule: String,
        /// Patient id to evaluate
        #[arg(short, long)]
        patient: i32,
        /// JSON map of concept names to ids
        #[arg(short, long)]
        concepts: PathBuf,
        /// Evaluation date (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Evaluate one rule for every patient in the file
    Batch {
        /// JSON file of patient observation records
        observations: PathBuf,
        /// Rule name (see `rules`)
        #[arg(short, long)]
        rule: String,
        /// JSON map of concept names to ids
        #[arg(short, long)]
        concepts: PathBuf,
        /// Evaluation date (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// List built-in rules
    Rules,
}

fn load_dictionary(path: &Path) -> anyhow::Result<ConceptDictionary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading concept map {}", path.display()))?;
    let entries: HashMap<String, i32> =
        serde_json::from_str(&text).with_context(|| format!("parsing concept map {}", path.display()))?;
    Ok(ConceptDictionary::from_entries(
        entries.into_iter().map(|(name, id)| (name, ConceptId(id))),
    ))
}

fn load_source(path: &Path) -> anyhow::Result<InMemorySource> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading observations {}", path.display()))?;
    let records: Vec<PatientRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing observations {}", path.display()))?;
    Ok(InMemorySource::from_records(records))
}

fn parse_as_of(value: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match value {
        Some(text) => {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .with_context(|| format!("parsing evaluation date {text:?}"))?;
            date.and_hms_opt(23, 59, 59)
                .context("building evaluation datetime")
        }
        None => Ok(Local::now().naive_local()),
    }
}

fn print_cell(patient: PatientId, cell: &str) {
    if cell.is_empty() {
        println!("{patient}: {}", "no episodes".dimmed());
    } else {
        println!("{patient}:");
        for line in cell.lines() {
            println!("  {line}");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            observations,
            rule,
            patient,
            concepts,
            as_of,
        } => {
            let dictionary = load_dictionary(&concepts)?;
            let source = load_source(&observations)?;
            let rule = rules::builtin(&rule, &dictionary)?;
            let as_of = parse_as_of(as_of.as_deref())?;

            let engine = EpisodeEngine::new(Arc::new(source));
            let cell = engine.evaluate(&rule, PatientId(patient), as_of).await?;
            print_cell(PatientId(patient), &cell);
        }
        Commands::Batch {
            observations,
            rule,
            concepts,
            as_of,
        } => {
            let dictionary = load_dictionary(&concepts)?;
            let source = load_source(&observations)?;
            let rule = rules::builtin(&rule, &dictionary)?;
            let as_of = parse_as_of(as_of.as_deref())?;

            let patients = source.patients();
            let engine = EpisodeEngine::new(Arc::new(source));
            println!("{} ({} patients)", rule.name.bold(), patients.len());
            for (patient, outcome) in engine.evaluate_cohort(&rule, &patients, as_of).await {
                match outcome {
                    Ok(cell) => print_cell(patient, &cell),
                    Err(err) => println!("{patient}: {}", err.to_string().red()),
                }
            }
        }
        Commands::Rules => {
            for name in rules::builtin_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
