//! Console front end: runs one bot command and prints the reply.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rankrelay::{Commands, Config};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Look up player rank and match history from the command line
#[derive(Parser)]
#[command(name = "rankrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reply with a greeting
    Hello,

    /// Show ranked standings for a Riot ID
    Rank {
        /// Player in the form Name#Tag
        riot_id: String,

        /// Platform region (na1, euw1, kr, ...)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// List recent match ids for a Riot ID
    Matches {
        /// Player in the form Name#Tag
        riot_id: String,

        /// Number of matches, 1 to 20
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Regional cluster (americas, europe, asia, sea)
        #[arg(short, long)]
        cluster: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to create tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let reply = runtime.block_on(run(cli.command, &config));
    println!("{reply}");
    ExitCode::SUCCESS
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rankrelay={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}

async fn run(command: Command, config: &Config) -> String {
    let commands = Commands::new(config);
    match command {
        Command::Hello => commands.hello(),
        Command::Rank { riot_id, region } => commands.rank(&riot_id, region.as_deref()).await,
        Command::Matches {
            riot_id,
            count,
            cluster,
        } => {
            commands
                .matches(&riot_id, count, cluster.as_deref())
                .await
        }
    }
}
