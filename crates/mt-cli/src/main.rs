//! CLI frontend for 2d20 dice and momentum/threat pools.

mod commands;
mod logging;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mt",
    about = "Momentum & threat: a 2d20 dice roller and pool tracker",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    table: TableArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the table keeps its state and who is sitting at it.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Directory holding one document per server
    #[arg(long, default_value = ".mt", global = true)]
    pub store: PathBuf,

    /// Game catalog JSON file (default: built-in systems)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// RNG seed for reproducible dice
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Server identifier
    #[arg(long, default_value = "local", global = true)]
    pub server: String,

    /// Channel identifier
    #[arg(long, default_value = "table", global = true)]
    pub channel: String,

    /// Channel display name (default: the channel identifier)
    #[arg(long, global = true)]
    pub channel_name: Option<String>,

    /// Name shown on dice results
    #[arg(long, default_value = "player", global = true)]
    pub user: String,

    /// Act as a server administrator
    #[arg(long, global = true)]
    pub admin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single command, e.g. `mt exec 2d20 12` or `mt exec m add 2 here`
    Exec {
        /// The command and its arguments (a leading `!` is optional)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        command: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read commands line by line from stdin
    Repl,

    /// List the game systems in the catalog
    Games {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Exec { command, json } => {
            commands::exec::run(&cli.table, &command.join(" "), json).await
        }
        Commands::Repl => commands::repl::run(&cli.table).await,
        Commands::Games { json } => commands::games::run(&cli.table, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
