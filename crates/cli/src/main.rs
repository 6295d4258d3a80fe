use std::time::Instant;

use anyhow::{Context, Result};
use api_client::{ApiClient, DEFAULT_API_URL};
use browser::{AppState, BrowserConfig, BrowserSession, LoadOutcome};
use catalog::parser::{parse_gender, parse_page, parse_status};
use catalog::{FilterState, Gender, Status};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

mod commands;
mod terminal;

use commands::{parse_command, run_command, Command, HELP};
use terminal::TerminalTarget;

/// personajes - Rick and Morty character browser
#[derive(Parser)]
#[command(name = "personajes")]
#[command(about = "Browse Rick and Morty characters from the terminal", long_about = None)]
struct Cli {
    /// Root of the character API
    #[arg(long, env = "RICK_AND_MORTY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of characters
    List {
        /// Name to search for (substring match on the server)
        #[arg(long, default_value = "")]
        name: String,

        /// alive, dead or unknown
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,

        /// female, male, genderless or unknown
        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,

        /// Page to load (starting at 1)
        #[arg(long, default_value = "1", value_parser = parse_page)]
        page: u32,
    },

    /// Browse interactively: search, filter, paginate and load more
    Browse {
        /// Initial name search
        #[arg(long, default_value = "")]
        name: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the character grid
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = ApiClient::new(&cli.api_url).context("Failed to set up the API client")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            name,
            status,
            gender,
            page,
        } => {
            let filters = FilterState::new()
                .with_name(name.trim())
                .with_status(status)
                .with_gender(gender)
                .with_page(page);
            handle_list(client, filters).await?
        }
        Commands::Browse { name } => {
            let filters = FilterState::new().with_name(name.trim());
            handle_browse(client, filters).await?
        }
    }

    Ok(())
}

/// Handle the 'list' command
async fn handle_list(client: ApiClient, filters: FilterState) -> Result<()> {
    let mut session = BrowserSession::with_state(
        client,
        TerminalTarget::stdout(),
        BrowserConfig::default(),
        AppState::with_filters(filters),
    );

    match session.start().await {
        LoadOutcome::Failed(err) => Err(err).context("Failed to load characters"),
        _ => Ok(()),
    }
}

/// Handle the 'browse' command
///
/// Reads one command per line from stdin. While typed input is pending, the
/// loop also waits for the debounce deadline so the search fires even if no
/// further line arrives.
async fn handle_browse(client: ApiClient, filters: FilterState) -> Result<()> {
    let mut session = BrowserSession::with_state(
        client,
        TerminalTarget::stdout(),
        BrowserConfig::default(),
        AppState::with_filters(filters),
    );

    println!("{}", "Personajes de Rick and Morty".bold().blue());
    println!("{}", HELP.dimmed());
    session.start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let next_line = match session.live_search_deadline() {
            Some(deadline) => {
                tokio::select! {
                    line = lines.next_line() => line,
                    _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                        session.settle_live_search(Instant::now()).await;
                        continue;
                    }
                }
            }
            None => lines.next_line().await,
        };

        let Some(line) = next_line.context("Failed to read from stdin")? else {
            info!("stdin closed, leaving browse session");
            break;
        };

        // A bad command is reported and the session keeps going
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                error!("{:#}", e);
                println!("{}", e.to_string().red());
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Some(note) = run_command(&mut session, command).await {
            println!("{}", note.yellow());
        }
    }

    Ok(())
}
