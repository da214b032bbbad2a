//! Alphabet Table - command-line driver.
//!
//! Loads configuration, initializes logging, builds a table and prints its
//! diagnostic rendering. Logs go to stderr so stdout carries only results.

use std::path::PathBuf;
use std::process;

use alphabet_table_lib::config::{AppConfig, ConfigLoader, ConfigResult, LogConfig, ENV_PREFIX};
use alphabet_table_lib::data_structures::alphabet_table::AlphabetTable;
use alphabet_table_lib::error::{AppError, AppResult, ErrorContext, ErrorReporter, TracingErrorReporter};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Alphabet Table driver.
#[derive(Parser, Debug)]
#[clap(name = "alphabet_table", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the AB/AC/BA sample and print the table
    Demo,

    /// Print the hash and bucket index of each key
    Hash {
        /// Keys to hash
        #[clap(required = true)]
        keys: Vec<String>,

        /// Print results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Build a table from KEY=VALUE pairs and print it
    Insert {
        /// Pairs to insert in order; later pairs overwrite earlier ones
        #[clap(required = true)]
        pairs: Vec<String>,

        /// Keys to delete after inserting
        #[clap(short, long)]
        delete: Vec<String>,

        /// Print buckets as JSON instead of the diagnostic rendering
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Hash result for a single key, as printed by `hash --json`.
#[derive(Debug, Serialize)]
struct HashReport {
    key: String,
    hash: Option<usize>,
    bucket: Option<usize>,
    error: Option<String>,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn build_table(config: &AppConfig) -> AppResult<AlphabetTable> {
    Ok(AlphabetTable::with_config(config.table.to_table_config())?)
}

fn parse_pair(pair: &str) -> AppResult<(&str, &str)> {
    pair.split_once('=')
        .ok_or_else(|| AppError::Custom(format!("Expected KEY=VALUE, got '{pair}'")))
}

fn run(command: Command, loaded: ConfigResult<AppConfig>, reporter: &dyn ErrorReporter) -> AppResult<()> {
    match command {
        Command::Demo => {
            let config = loaded?;
            let mut table = build_table(&config)?;
            info!(capacity = table.capacity(), "Running demo");

            for (key, value) in [("AB", "x"), ("AC", "y"), ("BA", "z")] {
                table.insert(key, value)?;
            }

            print!("{table}");
            for key in ["AB", "AC", "BA"] {
                println!("has_collision({key}) = {}", table.has_collision(key)?);
            }
            Ok(())
        }
        Command::Hash { keys, json } => {
            let config = loaded?;
            let table = build_table(&config)?;

            let mut reports = Vec::with_capacity(keys.len());
            for key in keys {
                let report = match (table.hash_code(&key), table.bucket_index(&key)) {
                    (Ok(hash), Ok(bucket)) => HashReport {
                        key,
                        hash: Some(hash),
                        bucket: Some(bucket),
                        error: None,
                    },
                    (Err(e), _) | (_, Err(e)) => {
                        let message = e.to_string();
                        reporter.report(
                            ErrorContext::new(AppError::Table(e), "hash").with_details(format!("key '{key}'")),
                        );
                        HashReport {
                            key,
                            hash: None,
                            bucket: None,
                            error: Some(message),
                        }
                    }
                };
                reports.push(report);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    match (&report.hash, &report.bucket, &report.error) {
                        (Some(hash), Some(bucket), _) => {
                            println!("{}: V: {hash}, H: {bucket}", report.key)
                        }
                        (_, _, error) => println!(
                            "{}: error: {}",
                            report.key,
                            error.as_deref().unwrap_or("unknown")
                        ),
                    }
                }
            }
            Ok(())
        }
        Command::Insert { pairs, delete, json } => {
            let config = loaded?;
            let mut table = build_table(&config)?;

            for pair in &pairs {
                let (key, value) = parse_pair(pair)?;
                table.insert(key, value)?;
            }
            for key in &delete {
                table.delete(key)?;
            }
            info!(entries = table.len(), capacity = table.capacity(), "Table built");

            if json {
                let buckets: Vec<_> = (0..table.capacity()).filter_map(|i| table.bucket(i)).collect();
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else {
                print!("{}", table.render());
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    let reporter = TracingErrorReporter;
    if let Err(e) = run(args.command.unwrap_or(Command::Demo), loaded, &reporter) {
        reporter.report(ErrorContext::new(e, "alphabet_table"));
        process::exit(1);
    }
}
