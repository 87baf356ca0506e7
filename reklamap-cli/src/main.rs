//! ReklaMap Command Line Interface
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.
//!
//! Usage:
//!   reklamap init          - Create the database schema
//!   reklamap start         - Start the API server
//!   reklamap seed <file>   - Load areas, blocks and beneficiaries
//!   reklamap token         - Mint a development bearer token
//!   reklamap status        - Query a running server's health

use clap::{Parser, Subcommand};
use reklamap_core::logging::LogLevel;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "reklamap")]
#[command(about = "ReklaMap complaint system CLI")]
#[command(version)]
struct Cli {
    /// Database URL (env: REKLAMAP_DB_URL)
    #[arg(long, env = "REKLAMAP_DB_URL", default_value = "sqlite://reklamap.db?mode=rwc")]
    db_url: String,

    /// Maximum pooled connections (env: REKLAMAP_DB_MAX_CONNECTIONS)
    #[arg(long, env = "REKLAMAP_DB_MAX_CONNECTIONS", default_value = "5")]
    db_max_connections: u32,

    /// Log level used when RUST_LOG is unset (env: REKLAMAP_LOG)
    #[arg(long, env = "REKLAMAP_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init,

    /// Start the API server (creates the schema if needed)
    Start {
        /// Host to bind to
        #[arg(short = 'H', long, env = "REKLAMAP_API_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "REKLAMAP_API_PORT", default_value = "3000")]
        port: u16,
        /// HS256 token secret, at least 32 bytes
        #[arg(long, env = "REKLAMAP_JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
        /// Allow cross-origin requests
        #[arg(long, env = "REKLAMAP_CORS", default_value_t = true, action = clap::ArgAction::Set)]
        cors: bool,
    },

    /// Load reference data (areas, blocks, beneficiaries) from a JSON file
    Seed {
        /// JSON file with `areas`, `blocks` and `beneficiaries` arrays
        file: PathBuf,
    },

    /// Mint a bearer token for development
    Token {
        /// Subject: complainant user id or staff assignee name
        #[arg(short, long)]
        sub: String,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// admin, staff or complainant
        #[arg(short, long, default_value = "complainant")]
        role: String,
        /// Lifetime in hours
        #[arg(long, default_value = "24")]
        hours: i64,
        /// HS256 token secret, at least 32 bytes
        #[arg(long, env = "REKLAMAP_JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },

    /// Show server status
    Status {
        /// API server URL
        #[arg(short, long, env = "REKLAMAP_API_URL", default_value = "http://localhost:3000")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run_command(cli).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging with tracing
fn init_logging(level: &str) {
    let level = LogLevel::parse(level).unwrap_or_default();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.filter_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run_command(cli: Cli) -> commands::CmdResult {
    let db = commands::DbArgs {
        url: cli.db_url,
        max_connections: cli.db_max_connections,
    };

    match cli.command {
        Commands::Init => commands::init(&db).await,
        Commands::Start {
            host,
            port,
            jwt_secret,
            cors,
        } => commands::start(&db, host, port, jwt_secret, cors).await,
        Commands::Seed { file } => commands::seed(&db, &file).await,
        Commands::Token {
            sub,
            name,
            role,
            hours,
            jwt_secret,
        } => commands::token(&sub, name.as_deref(), &role, hours, jwt_secret),
        Commands::Status { api_url } => commands::status(&api_url).await,
    }
}
