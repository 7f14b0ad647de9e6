use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "RGX ranking lookup and match calculator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the lookup server
    Serve {
        /// Port number (optional, defaults to 5000)
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
    /// Scrape both division rankings and store a new snapshot
    Ingest,
    /// Look up a single player by id or name (append " (o)" for Open)
    Lookup {
        query: String,
    },
    /// Show the player id and division used for rating history
    History {
        query: String,
    },
    /// Rate two teams of two against each other
    Match {
        /// Team 1 players: ids, names or direct ratings like (1850)
        #[arg(long, num_args = 2, required = true)]
        team1: Vec<String>,
        /// Team 2 players
        #[arg(long, num_args = 2, required = true)]
        team2: Vec<String>,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}
