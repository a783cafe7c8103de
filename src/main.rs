use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use patronage_core::config::Config;
use patronage_store::MongoStore;

#[derive(Parser)]
#[command(name = "patronage", about = "Normalize CSV transaction exports into JSON or MongoDB")]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert CSV to a JSON records document.
    Convert {
        /// Input CSV, `-` or omitted for stdin.
        input: Option<PathBuf>,
        /// Output JSON, `-` or omitted for stdout.
        output: Option<PathBuf>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Import CSV rows into the configured MongoDB collection.
    Import {
        /// Configuration file with a `[mongodb]` section.
        #[arg(short, long)]
        config: PathBuf,
        /// Input CSV, `-` or omitted for stdin.
        csvfile: Option<PathBuf>,
    },
    /// Remove every record from the configured collection.
    #[command(alias = "drop_all")]
    DropAll {
        /// Configuration file with a `[mongodb]` section.
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("patronage debug log started");
    }

    match cli.command {
        Some(Command::Convert {
            input,
            output,
            pretty,
        }) => {
            let input = open_input(input.as_deref())?;
            patronage::convert(input, || open_output(output.as_deref()), pretty)?;
        }
        Some(Command::Import { config, csvfile }) => {
            let input = open_input(csvfile.as_deref())?;
            let mut store = connect(&config)?;
            let imported = patronage::import(input, &mut store)?;
            println!("{imported} new objects imported to the database collection");
        }
        Some(Command::DropAll { config }) => {
            let mut store = connect(&config)?;
            patronage::drop_all(&mut store, io::stdout().lock())?;
        }
        None => {
            eprintln!("command not found");
            Cli::command().print_help()?;
        }
    }
    Ok(())
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(p) if !is_stdio(path) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_stdio(path) => {
            let file = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn connect(config_path: &Path) -> anyhow::Result<MongoStore> {
    let config = Config::load(config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    MongoStore::connect(&config.mongodb).context("connecting to mongodb")
}
