use clap::{Parser, Subcommand};
use freshkeep_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CommandResult, Session};

#[derive(Parser)]
#[command(name = "freshkeep", version, about = "FreshKeep household food tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Food inventory
    Inventory {
        #[command(subcommand)]
        action: commands::inventory::InventoryAction,
    },
    /// Items expiring soon
    Expiring {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recipe suggestions
    Recipes {
        #[command(subcommand)]
        action: commands::recipes::RecipesAction,
    },
    /// Shopping list
    Shopping {
        #[command(subcommand)]
        action: commands::shopping::ShoppingAction,
    },
    /// Inventory statistics
    Analytics {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Run commands from stdin against one store
    Shell,
}

fn dispatch(command: Commands, session: &Session) -> CommandResult {
    match command {
        Commands::Inventory { action } => commands::inventory::run(action, session),
        Commands::Expiring { json } => commands::expiring::run(json, session),
        Commands::Recipes { action } => commands::recipes::run(action, session),
        Commands::Shopping { action } => commands::shopping::run(action, session),
        Commands::Analytics { json } => commands::analytics::run(json, session),
        Commands::Config { action } => commands::config::run(action),
        Commands::Shell => commands::shell::run(session),
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors share exit code 1 with command failures.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    let config = Config::load_or_default();
    init_logging(&config);

    let result = Session::new(config).and_then(|session| dispatch(cli.command, &session));

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
