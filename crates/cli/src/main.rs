use crate::{
    commands::{HeaderArgs, TableArgs},
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use nametools::{AliasTable, CaseMode, Resolver};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod dataset;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "nametools",
    version = "0.1.0",
    about = "Resolve dataset column headers to canonical field names"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            table,
            headers,
            json,
            output,
        } => {
            let path = table_path(&table)?;
            let headers = dataset_headers(headers)?;
            info!(
                "Resolving {} headers against {}",
                headers.len(),
                path.display()
            );

            let names = nametools::get_name_dict(&headers, &path)?;
            match output {
                Some(out) => output::write_names(&names, &out)?,
                None => output::print_names(&names, json)?,
            }
        }
        Commands::Lookup {
            table,
            name,
            headers,
            ignore_case,
        } => {
            let path = table_path(&table)?;
            let headers = dataset_headers(headers)?;

            let header = lookup(&path, &name, &headers, ignore_case)?;
            println!("{header}");
        }
        Commands::Show { table, json } => {
            let path = table_path(&table)?;
            let table = AliasTable::load(&path)?;
            output::print_table(&table, json)?;
        }
    }

    Ok(())
}

/// Single-field lookup; no match is an error so the process exits non-zero.
fn lookup(
    path: &Path,
    name: &str,
    headers: &[String],
    ignore_case: bool,
) -> Result<String, CliError> {
    let found = if ignore_case {
        Resolver::load(path)?
            .with_case_mode(CaseMode::Insensitive)
            .resolve(name, headers)?
    } else {
        nametools::get_name(name, headers, path)?
    };

    found.ok_or_else(|| CliError::HeaderNotFound {
        name: name.to_string(),
    })
}

fn table_path(args: &TableArgs) -> Result<PathBuf, CliError> {
    let mut env = EnvManager::new();
    if let Some(env_file) = &args.env_file {
        env.load_from_file(env_file)?;
    }
    env.alias_table(args.table.as_deref())
}

fn dataset_headers(args: HeaderArgs) -> Result<Vec<String>, CliError> {
    match (args.headers, args.data) {
        (Some(headers), _) => Ok(headers),
        (None, Some(path)) => dataset::read_headers(&path),
        (None, None) => Err(CliError::Config(
            "either --headers or --data is required".to_string(),
        )),
    }
}
