use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detective_quest::console::TerminalConsole;
use detective_quest::layout;
use detective_quest::suspect_map::DEFAULT_CAPACITY;
use detective_quest::{Level, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(about = "Explore a mansion, collect clues and accuse a suspect", long_about = None)]
struct Args {
    /// Difficulty level
    #[arg(short, long, value_enum, default_value_t = Level::Mestre)]
    level: Level,

    /// JSON mansion layout replacing the built-in mansion of the level
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Number of slots in the clue -> suspect table
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    table_capacity: usize,

    /// Print the session report as JSON when the game ends
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let graph = match &args.layout {
        Some(path) => layout::load_layout(path)
            .with_context(|| format!("Failed to build mansion from {}", path.display()))?,
        None => layout::preset(args.level)
            .with_context(|| format!("Failed to build the {} mansion", args.level))?,
    };

    let mut session = Session::new(args.level, graph, args.table_capacity)
        .context("Invalid suspect table configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = TerminalConsole::new(stdin.lock(), stdout.lock());
    let report = session.run(&mut console).context("Console I/O failed")?;
    drop(console);

    if args.json {
        println!();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
