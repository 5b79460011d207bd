//! Combined binary - wink store and mail tools behind one command.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use common::AppResult;
use domain::TEST_EMAIL_TO_VAR;
use mail_service_lib::SendTestOptions;
use wink_service_lib::{MigrateAction as WinkMigrateAction, WinkAction};

#[derive(Parser)]
#[command(name = "winkctl")]
#[command(about = "Wink store and mail operator tools")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Record and inspect winks
    Wink {
        #[command(subcommand)]
        action: WinkCommand,
    },
    /// Send a test email to check the mail configuration
    SendTestEmail {
        /// Recipient address
        #[arg(long, env = TEST_EMAIL_TO_VAR)]
        to: Option<String>,
        /// Log the email instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
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
enum WinkCommand {
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

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Every failure has already been reported to the operator
    if let Err(e) = execute(cli.command).await {
        tracing::debug!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn execute(command: Commands) -> AppResult<()> {
    match command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => WinkMigrateAction::Up,
                MigrateAction::Down => WinkMigrateAction::Down,
                MigrateAction::Status => WinkMigrateAction::Status,
                MigrateAction::Fresh => WinkMigrateAction::Fresh,
            };

            // Only the wink store owns a database
            let result = wink_service_lib::run_migrations(migrate_action).await;
            report_failure(result, &mut io::stderr())
        }
        Commands::Wink { action } => {
            let wink_action = match action {
                WinkCommand::Create {
                    post_id,
                    user_id,
                    at,
                } => WinkAction::Create {
                    post_id,
                    user_id,
                    created_at: at,
                },
                WinkCommand::Show { id } => WinkAction::Show { id },
                WinkCommand::List { post_id } => WinkAction::List { post_id },
            };

            let result = wink_service_lib::run_wink_command(wink_action).await;
            report_failure(result, &mut io::stderr())
        }
        // The runner writes its own failure line
        Commands::SendTestEmail { to, dry_run } => mail_service_lib::run_send_test(
            SendTestOptions {
                recipient: to,
                dry_run,
            },
        )
        .await
        .map(|_| ()),
    }
}

/// Log a failed command and tell the operator what went wrong.
fn report_failure(result: AppResult<()>, err: &mut dyn Write) -> AppResult<()> {
    if let Err(e) = &result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        if let Err(write_err) = writeln!(err, "{}", e.user_message()) {
            tracing::warn!(error = %write_err, "Failed to write operator output");
        }
    }
    result
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
