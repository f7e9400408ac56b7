//! codex-search command line front end.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use codex_search::app::App;
use codex_search::platform;
use codex_search::types::settings::StorageBackend;
use codex_search::ui::markup;

#[derive(Parser)]
#[command(
    name = "codex-search",
    version,
    about = "Sanitized GitHub code search with a persisted search history"
)]
struct Cli {
    /// Directory holding the persisted history (defaults to the platform data dir)
    #[arg(long, global = true, env = "CODEX_SEARCH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Storage backend: memory, file or sqlite (overrides settings)
    #[arg(long, global = true)]
    backend: Option<StorageBackend>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a search and print its URL
    Search {
        #[arg(trailing_var_arg = true, required = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// List the search history, oldest first
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Delete the history entries with the given timestamp
    Delete {
        /// Entry id (milliseconds since the epoch)
        time: i64,
    },
    /// Remove the whole history
    Clear,
    /// Print the history list markup
    Render,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("codex_search=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("codex_search=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(platform::get_data_dir);
    let mut app = App::new(&data_dir, cli.backend)
        .with_context(|| format!("failed to open history in {}", data_dir.display()))?;

    match cli.command {
        Commands::Search { words } => match app.search(&words.join(" "))? {
            Some(outcome) => println!("{}", outcome.record.url),
            None => eprintln!("nothing to search for"),
        },
        Commands::List { json } => {
            let records = app.records();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for r in &records {
                    println!("{}  {}  {}", r.time, markup::format_time(r.time), r.original_query);
                }
            }
        }
        Commands::Delete { time } => {
            let removed = app.delete_entry(time)?;
            println!("removed {} entr{}", removed, if removed == 1 { "y" } else { "ies" });
        }
        Commands::Clear => {
            app.clear_history()?;
            println!("history cleared");
        }
        Commands::Render => println!("{}", app.render_history()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[codex-search] error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
