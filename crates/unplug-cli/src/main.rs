use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "unplug", version, about = "Digital detox assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive wellness session
    Run {
        /// Also serve the web surface while the session runs
        #[arg(long)]
        serve: bool,
    },
    /// Serve the web surface only
    Serve {
        /// Name reported by /start
        #[arg(long)]
        name: Option<String>,
        /// Daily screen time goal in hours reported by /start
        #[arg(long)]
        goal: Option<f64>,
    },
    /// Brightness and resolution report for an image
    Analyze {
        /// Image file to analyse
        path: std::path::PathBuf,
    },
    /// Screen-free activity for the current time of day
    Suggest,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let dev = ["UNPLUG_ENV", "FLASK_ENV"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .any(|value| unplug_core::config::is_development(&value));
    let default_level = if dev { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { serve } => commands::run::run(serve),
        Commands::Serve { name, goal } => commands::serve::run(name, goal),
        Commands::Analyze { path } => commands::analyze::run(&path),
        Commands::Suggest => commands::suggest::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
