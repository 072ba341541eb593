use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "waypost",
    about = "Search the site's content index from the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against the built-in content index
    Query {
        /// Query text (sanitized before matching)
        text: String,

        /// Emit results as JSON instead of the human listing
        #[arg(long)]
        json: bool,

        /// Show at most this many results (capped at the ranker's limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Dump the validated content index
    Records {
        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive search overlay (requires a TTY)
    Interactive,
}
