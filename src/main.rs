mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drunksched_core::Event;
use drunksched_core::config::SchedConfig;
use drunksched_core::store::{EventStore, FileStore, ListFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drunksched")]
#[command(about = "Propose dates, collect votes and settle on a day to go drinking")]
struct Cli {
    /// Event directory (overrides data_dir from the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, most pressing first
    List {
        /// Include events whose dates have all passed
        #[arg(short, long)]
        all: bool,
    },
    /// Show votes and scores for an event
    Show {
        id: String,

        /// Print the raw event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event with candidate dates
    New {
        name: String,

        /// Candidate date (YYYY-MM-DD), repeat for more
        #[arg(short, long = "date", required = true)]
        dates: Vec<String>,

        #[arg(long)]
        description: Option<String>,

        /// Late arrivals are welcome
        #[arg(short, long)]
        welcome: bool,
    },
    /// Edit an event. Changing the dates clears all votes
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Replace candidate dates (YYYY-MM-DD), repeat for more
        #[arg(short, long = "date")]
        dates: Vec<String>,

        /// New description, pass "" to clear it
        #[arg(long)]
        description: Option<String>,

        /// Set whether late arrivals are welcome
        #[arg(short, long)]
        welcome: Option<bool>,
    },
    /// Record a participant's marks, e.g. `vote <id> Aki 2025-03-20=yes 2025-03-21=maybe`
    Vote {
        id: String,
        name: String,

        /// DATE=MARK pairs; MARK is ○/△/× or yes/maybe/no
        #[arg(required = true)]
        marks: Vec<String>,
    },
    /// Remove a participant's response
    Unvote { id: String, name: String },
    /// Fix the final date
    Confirm { id: String, date: String },
    /// Go back to negotiating
    Unconfirm { id: String },
    /// Delete an event and its responses
    Delete { id: String },
    /// Write the event as an .ics calendar
    Export {
        id: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = open_store(cli.data_dir)?;

    match cli.command {
        Commands::List { all } => {
            let filter = if all {
                ListFilter::All
            } else {
                ListFilter::FutureRelevant
            };
            commands::list::run(&store, filter)
        }
        Commands::Show { id, json } => {
            let event = resolve_event(&store, &id)?;
            commands::show::run(&event, json)
        }
        Commands::New {
            name,
            dates,
            description,
            welcome,
        } => commands::new::run(&store, name, &dates, description, welcome),
        Commands::Edit {
            id,
            name,
            dates,
            description,
            welcome,
        } => {
            let event = resolve_event(&store, &id)?;
            let edit = commands::edit::Edit {
                name,
                dates,
                description,
                welcome,
            };
            commands::edit::run(&store, event, edit)
        }
        Commands::Vote { id, name, marks } => {
            let event = resolve_event(&store, &id)?;
            commands::vote::run(&store, &event, &name, &marks)
        }
        Commands::Unvote { id, name } => {
            let event = resolve_event(&store, &id)?;
            commands::vote::remove(&store, &event, &name)
        }
        Commands::Confirm { id, date } => {
            let event = resolve_event(&store, &id)?;
            commands::confirm::run(&store, &event, &date)
        }
        Commands::Unconfirm { id } => {
            let event = resolve_event(&store, &id)?;
            commands::confirm::undo(&store, &event)
        }
        Commands::Delete { id } => {
            let event = resolve_event(&store, &id)?;
            commands::delete::run(&store, &event)
        }
        Commands::Export { id, output } => {
            let event = resolve_event(&store, &id)?;
            commands::export::run(&event, output)
        }
    }
}

fn open_store(data_dir: Option<PathBuf>) -> Result<FileStore> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => SchedConfig::load()?.data_path(),
    };
    Ok(FileStore::open(dir)?)
}

/// Find an event by full id or by an unambiguous id prefix.
fn resolve_event(store: &dyn EventStore, id: &str) -> Result<Event> {
    if let Some(event) = store.load(id)? {
        return Ok(event);
    }

    let mut matches: Vec<Event> = store
        .load_all()?
        .into_iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => anyhow::bail!(
            "Event '{}' not found.\n\n\
            See all events with:\n  \
            drunksched list --all",
            id
        ),
        n => anyhow::bail!("'{}' matches {} events, use a longer id", id, n),
    }
}
