use clap::{Parser, Subcommand};
use evbus::cmd::{InspectArgs, PublishArgs, inspect, publish};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing `app.yaml`.
    #[arg(short, long, global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publishes one event to the bus.
    Publish(PublishArgs),
    /// Parses received events and prints a summary of each.
    Inspect(InspectArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Publish(args) => publish::run(cli.config_dir.as_deref(), args).await?,
        Commands::Inspect(args) => inspect::execute(args)?,
    }

    Ok(())
}
