//! Sparplan
//!
//! Host server and command-line tools for the savings-plan calculator:
//! - Serve the frontend and JSON API
//! - Validate plan values offline
//! - Inspect the route table and ETF catalogue
//! - Generate a config file
//!
//! Run with: cargo run -- serve

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sparplan::api::{serve, AppState};
use sparplan::config::{generate_default_config, Config, ConfigSource};
use sparplan::logging::init_tracing;
use sparplan::{app_table, format_eur, Etf, SavingsPlanInput};

#[derive(Parser)]
#[command(name = "sparplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "ETF savings-plan calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend and API (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built frontend
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Validate savings plan values
    Validate {
        /// ETF identifier (see `sparplan etfs`)
        #[arg(short, long, default_value = "msci-world")]
        etf: String,
        /// Monthly rate in EUR
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        /// Duration in years
        #[arg(short, long, default_value_t = 10)]
        years: u32,
    },

    /// List the route table
    Routes,

    /// List the ETF catalogue
    Etfs,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => {
            let source = ConfigSource {
                path: Some(path.clone()),
                ..Default::default()
            };
            (Config::load_with_env(path)?, source)
        }
        None => Config::load_default(),
    };

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        static_dir: None,
    });

    // Only `serve` installs a subscriber
    if !matches!(command, Commands::Serve { .. }) {
        for error in &source.skipped {
            eprintln!("Warning: skipping config file: {}", error);
        }
    }

    match command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            init_tracing(&config.logging);
            tracing::info!("Starting Sparplan v{}", env!("CARGO_PKG_VERSION"));
            source.log();

            let mut server = config.server;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(dir) = static_dir {
                server.static_dir = dir;
            }
            tracing::info!("Static directory: {:?}", server.static_dir);

            serve(AppState::new(server)).await?;
        }

        Commands::Validate { etf, rate, years } => {
            let etf: Etf = etf.parse()?;
            let result = SavingsPlanInput { etf, rate, years }.validate();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => {
                    println!("ETF:      {} ({})", etf.name(), etf.isin());
                    println!("Sparrate: {} / Monat", format_eur(rate));
                    println!("Laufzeit: {} Jahre", years);
                    if result.is_valid {
                        println!("✓ Eingaben gültig");
                    } else {
                        println!("✗ {}", result.message);
                    }
                }
            }

            if !result.is_valid {
                std::process::exit(1);
            }
        }

        Commands::Routes => {
            let table = app_table(|route| route.title());

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table.info())?),
                OutputFormat::Text => {
                    println!("{:<12} {:<10} {:<6} Title", "Path", "Name", "Load");
                    for info in table.info() {
                        let mode = if info.lazy { "lazy" } else { "eager" };
                        let title = table.resolve(&info.path).copied().unwrap_or_default();
                        println!("{:<12} {:<10} {:<6} {}", info.path, info.name, mode, title);
                    }
                }
            }
        }

        Commands::Etfs => match cli.format {
            OutputFormat::Json => {
                let etfs: Vec<_> = Etf::ALL
                    .into_iter()
                    .map(sparplan::api::dto::EtfResponse::from)
                    .collect();
                println!("{}", serde_json::to_string_pretty(&etfs)?);
            }
            OutputFormat::Text => {
                println!("{:<24} {:<14} Name", "ID", "ISIN");
                for etf in Etf::ALL {
                    println!("{:<24} {:<14} {}", etf.id(), etf.isin(), etf.name());
                }
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

