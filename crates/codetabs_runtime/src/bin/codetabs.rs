//! Codetabs CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use codetabs_foundation::{LookupKey, Result, VariantKey};
use codetabs_runtime::report::{
    RecordView, format_audit, format_check, format_components, format_record, format_variants,
};
use codetabs_runtime::{CheckConfig, audit_dir, check, to_json};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "codetabs", version)]
#[command(about = "Code example registry for component documentation")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every record for its required languages
    Check {
        /// Configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the code variants of one example
    Show {
        /// Component id, e.g. `button`
        component: String,

        /// Variant key, e.g. `primary`
        variant: String,

        /// Fall back to the `default` variant if the variant is missing
        #[arg(long)]
        default: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List components, or the variants of one component
    List {
        /// Component id
        component: Option<String>,
    },

    /// Resolve every code-variant reference in a story directory
    Audit {
        /// Directory to scan for story files
        #[arg(value_name = "DIR")]
        stories: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                eprintln!("{context}");
            }
            ExitCode::from(2)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs one command. `Ok(false)` means the command completed with failures.
fn run(command: Command) -> Result<bool> {
    let service = codetabs_catalog::service();

    match command {
        Command::Check { config, json } => {
            let config = match config {
                Some(path) => CheckConfig::load(path)?,
                None => CheckConfig::default(),
            };
            let outcome = check(&service, &config)?;
            emit(&outcome, json, || format_check(&outcome))?;
            Ok(!outcome.failed)
        }

        Command::Show {
            component,
            variant,
            default,
            json,
        } => {
            let record = if default {
                service.lookup_with_default(&component, &variant)?
            } else {
                service.lookup(&component, &variant)?
            };
            let resolved = if service.contains(&component, &variant) {
                variant.as_str()
            } else {
                VariantKey::DEFAULT
            };
            let key = LookupKey::parse(&component, resolved)?;
            let view = RecordView {
                key: &key,
                snippets: record,
            };
            emit(&view, json, || format_record(&key, record))?;
            Ok(true)
        }

        Command::List { component: None } => {
            print!("{}", format_components(service.components()));
            Ok(true)
        }

        Command::List {
            component: Some(component),
        } => {
            print!("{}", format_variants(&component, service.variants(&component)?));
            Ok(true)
        }

        Command::Audit { stories, json } => {
            let outcome = audit_dir(&service, &stories)?;
            emit(&outcome, json, || format_audit(&outcome))?;
            Ok(!outcome.failed())
        }
    }
}

fn emit<T, F>(value: &T, json: bool, text: F) -> Result<()>
where
    T: serde::Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", to_json(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
