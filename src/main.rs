use anyhow::*;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod import;
mod payload;
mod preview;

use crate::import::ImportSet;
use crate::payload::BulkCreateRequest;

#[derive(Debug, Parser)]
#[command(name = "lockin-import")]
#[command(about = "Validate and package question-set import files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an import file and report what it contains
    Check(FileArgs),
    /// Print the parsed questions with the correct option marked
    Preview(FileArgs),
    /// Print the bulk-create request body for a topic
    Payload(PayloadArgs),
}

#[derive(Debug, Args)]
struct FileArgs {
    file: PathBuf,
}

#[derive(Debug, Args)]
struct PayloadArgs {
    file: PathBuf,
    #[arg(long)]
    topic_id: String,
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => check(&args.file),
        Command::Preview(args) => preview(&args.file),
        Command::Payload(args) => payload(&args),
    }
}

fn check(file: &Path) -> Result<()> {
    let set = ImportSet::open(file)?;
    let questions = set.get_questions();
    let num_options: usize = questions.iter().map(|q| q.options.len()).sum();
    tracing::debug!("Parsed {}", file.display());
    println!(
        "{}: {} question(s), {} option(s), ready to import",
        file.display(),
        questions.len(),
        num_options
    );
    Ok(())
}

fn preview(file: &Path) -> Result<()> {
    let set = ImportSet::open(file)?;
    println!("{}", preview::render(set.get_questions()));
    Ok(())
}

fn payload(args: &PayloadArgs) -> Result<()> {
    let set = ImportSet::open(&args.file)?;
    let questions = set.get_questions().to_vec();
    tracing::debug!(
        "Building bulk-create payload for topic {} ({} questions)",
        args.topic_id,
        questions.len()
    );
    let request = BulkCreateRequest::new(args.topic_id.clone(), questions);
    let json = if args.compact {
        request.to_json_compact()?
    } else {
        request.to_json()?
    };
    println!("{}", json);
    Ok(())
}
