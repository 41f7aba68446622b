use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{
    BlogCommand, CategoriesCommand, ConfigCommand, FactCommand, LocationsCommand, SavedCommand,
    SettingsCommand, ShareAppCommand, Stores,
};
use fauna_parks::{Config, StaticCatalog};

#[derive(Parser)]
#[command(name = "parks")]
#[command(version)]
#[command(about = "Explore Canada's wildlife parks and keep a list of favorites", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, save and share parks
    Locations(LocationsCommand),

    /// List park categories
    Categories(CategoriesCommand),

    /// Show saved locations
    Saved(SavedCommand),

    /// Read the guide's stories
    Blog(BlogCommand),

    /// View or change settings
    Settings(SettingsCommand),

    /// Show a random wildlife fact
    Fact(FactCommand),

    /// Print the app's share message
    Share(ShareAppCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    init_tracing(&config.log_filter.value);

    let catalog = StaticCatalog::new();

    match cli.command {
        Some(Commands::Locations(cmd)) => {
            let stores = Stores::open(&config).await?;
            cmd.run(&catalog, &stores, &config).await?;
        }
        Some(Commands::Categories(cmd)) => {
            cmd.run(&catalog)?;
        }
        Some(Commands::Saved(cmd)) => {
            let stores = Stores::open(&config).await?;
            cmd.run(&catalog, &stores).await?;
        }
        Some(Commands::Blog(cmd)) => {
            cmd.run(&catalog)?;
        }
        Some(Commands::Settings(cmd)) => {
            let stores = Stores::open(&config).await?;
            cmd.run(&stores).await?;
        }
        Some(Commands::Fact(cmd)) => {
            cmd.run(&catalog)?;
        }
        Some(Commands::Share(cmd)) => {
            cmd.run()?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Logs go to stderr; RUST_LOG takes precedence over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
