use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use chanscope::{investigate, report, Client, Operation, Request, SiteId};

/// Imageboard investigation tool over the read-only JSON API.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board name (e.g. pol, b, int). Required for every operation except
    /// `boards`.
    board: Option<String>,

    /// Operation to perform.
    #[arg(short, long, value_enum)]
    operation: Operation,

    /// Thread number (for the thread operation).
    #[arg(short, long, required_if_eq("operation", "thread"))]
    thread: Option<u64>,

    /// Keyword to search for (for the search operation).
    #[arg(short, long, required_if_eq("operation", "search"))]
    keyword: Option<String>,

    /// Imageboard site.
    #[arg(short, long, value_enum, default_value_t = SiteId::Fourchan)]
    site: SiteId,

    /// Output file for JSON results.
    #[arg(short = 'f', long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    // the remaining validation clap cannot express: every operation except
    // the board listing names a board
    if cli.board.is_none() && cli.operation != Operation::Boards {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "board is required for this operation",
            )
            .exit();
    }

    let client = Client::new();
    let request = Request {
        board: cli.board.unwrap_or_default(),
        operation: cli.operation.to_string(),
        site: cli.site,
        thread_no: cli.thread,
        keyword: cli.keyword,
    };

    let results = investigate(&client, request).await;

    println!("{results}");

    if let Some(path) = cli.output.as_deref() {
        report::save_json(&results, path)?;
        println!("\nResults saved to: {}", path.display());
    }

    Ok(())
}
