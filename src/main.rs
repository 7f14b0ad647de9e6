use anyhow::Result;

use rgx_ranking::cli::Command;
use rgx_ranking::{
    handle_completions, handle_history, handle_ingest, handle_lookup, handle_match, handle_serve,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Ingest => handle_ingest(),
        Command::Lookup { query } => handle_lookup(query),
        Command::History { query } => handle_history(query),
        Command::Match { team1, team2 } => handle_match(team1, team2),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
