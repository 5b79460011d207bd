//! Wink Service - command-line access to the wink store.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use wink_service_lib::{MigrateAction, WinkAction};

#[derive(Parser)]
#[command(name = "wink-service")]
#[command(about = "Wink storage service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Record and inspect winks
    Wink {
        #[command(subcommand)]
        action: WinkCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum WinkCommands {
    /// Record that a user winked at a post
    Create {
        #[arg(long = "post")]
        post_id: String,
        #[arg(long = "user")]
        user_id: String,
        /// Creation time (RFC 3339), defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Show a wink by id
    Show { id: Uuid },
    /// List winks on a post
    List {
        #[arg(long = "post")]
        post_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            wink_service_lib::run_migrations(migrate_action).await
        }
        Commands::Wink { action } => {
            let wink_action = match action {
                WinkCommands::Create {
                    post_id,
                    user_id,
                    at,
                } => WinkAction::Create {
                    post_id,
                    user_id,
                    created_at: at,
                },
                WinkCommands::Show { id } => WinkAction::Show { id },
                WinkCommands::List { post_id } => WinkAction::List { post_id },
            };
            wink_service_lib::run_wink_command(wink_action).await
        }
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}
