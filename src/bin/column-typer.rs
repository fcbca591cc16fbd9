use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use column_typer::execution::{ExecutionEngine, ExecutionOptions, TracingExecutionObserver};
use column_typer::ingestion::{
    load_reference, read_table, CompositeObserver, FileObserver, IngestionObserver, IngestionOptions,
    IngestionSeverity, TracingObserver,
};
use column_typer::pipeline::parse_with_selection;
use column_typer::scoring::{DEFAULT_COMPANY_THRESHOLD, DEFAULT_PHONE_THRESHOLD};
use column_typer::{Classifier, SelectionOptions};

#[derive(Parser)]
#[command(name = "column-typer", about = "Infer and decompose phone/company columns in tabular data")]
struct Cli {
    /// Also append load events to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ReferenceArgs {
    /// Country names, one per line
    #[arg(long, default_value = "data/countries.txt")]
    countries: PathBuf,
    /// Legal-entity suffixes, one per line, most specific first
    #[arg(long, default_value = "data/legal.txt")]
    legal: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the semantic type of one column (phoneNumber, companyName, country, date, other)
    Predict {
        /// Input table (.csv, .json, .ndjson)
        #[arg(long)]
        input: PathBuf,
        /// Column to classify
        #[arg(long)]
        column: String,
        #[command(flatten)]
        refs: ReferenceArgs,
        /// Print the full classification as JSON instead of only the label
        #[arg(long)]
        json: bool,
    },
    /// Find the phone and company columns and write them decomposed
    Parse {
        /// Input table (.csv, .json, .ndjson)
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        refs: ReferenceArgs,
        /// Output CSV file
        #[arg(long, default_value = "output.csv")]
        output: PathBuf,
        /// Minimum phone match fraction for the phone column to be parsed
        #[arg(long, default_value_t = DEFAULT_PHONE_THRESHOLD)]
        phone_threshold: f64,
        /// Minimum company match fraction for the company column to be parsed
        #[arg(long, default_value_t = DEFAULT_COMPANY_THRESHOLD)]
        company_threshold: f64,
        /// Worker threads for column scoring (default: available parallelism)
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let ingest = ingestion_options(cli.log_file.as_deref());

    match cli.command {
        Commands::Predict {
            input,
            column,
            refs,
            json,
        } => {
            let classifier = load_classifier(&refs, &ingest)?;
            let table = read_table(&input, &ingest)
                .with_context(|| format!("reading {}", input.display()))?;
            let values = &table.column(&column)?.values;
            let result = classifier.classify(values);
            tracing::debug!(column = %column, fractions = ?result.fractions, "column classified");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.label);
            }
        }
        Commands::Parse {
            input,
            refs,
            output,
            phone_threshold,
            company_threshold,
            threads,
        } => {
            let classifier = load_classifier(&refs, &ingest)?;
            let table = read_table(&input, &ingest)
                .with_context(|| format!("reading {}", input.display()))?;
            if table.is_empty() {
                anyhow::bail!("no data found in {}", input.display());
            }

            let options = SelectionOptions {
                phone_threshold,
                company_threshold,
            };
            let engine = ExecutionEngine::new(ExecutionOptions {
                num_threads: threads,
            })?
            .with_observer(Arc::new(TracingExecutionObserver));
            let selection = engine.select_columns(&classifier, &table, &options)?;
            let parsed = parse_with_selection(&table, &classifier, selection);
            parsed
                .write_csv_path(&output)
                .with_context(|| format!("writing {}", output.display()))?;

            if parsed.passthrough {
                println!(
                    "No phone/company columns detected above thresholds. Wrote original data to {}",
                    output.display()
                );
            } else {
                println!("Wrote parsed output to {}", output.display());
                if let Some(pick) = parsed.parsed_phone() {
                    println!("Parsed phone column: '{}' with score {:.3}", pick.column, pick.score);
                }
                if let Some(pick) = parsed.parsed_company() {
                    println!("Parsed company column: '{}' with score {:.3}", pick.column, pick.score);
                }
            }
        }
    }

    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");
    Ok(())
}

fn ingestion_options(log_file: Option<&Path>) -> IngestionOptions {
    let tracing_observer: Arc<dyn IngestionObserver> = Arc::new(TracingObserver);
    let observer: Arc<dyn IngestionObserver> = match log_file {
        Some(path) => Arc::new(CompositeObserver::new(vec![
            tracing_observer,
            Arc::new(FileObserver::new(path)),
        ])),
        None => tracing_observer,
    };
    IngestionOptions {
        observer: Some(observer),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    }
}

fn load_classifier(refs: &ReferenceArgs, ingest: &IngestionOptions) -> anyhow::Result<Classifier> {
    let countries = load_reference(&refs.countries, ingest)
        .with_context(|| format!("loading countries from {}", refs.countries.display()))?;
    let legal = load_reference(&refs.legal, ingest)
        .with_context(|| format!("loading legal suffixes from {}", refs.legal.display()))?;
    Ok(Classifier::new(&countries, legal))
}
