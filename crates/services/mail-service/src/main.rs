//! Mail Service - operator tools for outgoing mail.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::TEST_EMAIL_TO_VAR;
use mail_service_lib::SendTestOptions;

#[derive(Parser)]
#[command(name = "mail-service")]
#[command(about = "Outgoing mail tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a test email to check the mail configuration
    SendTest {
        /// Recipient address
        #[arg(long, env = TEST_EMAIL_TO_VAR)]
        to: Option<String>,
        /// Log the email instead of sending it
        #[arg(long)]
        dry_run: bool,
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
        Commands::SendTest { to, dry_run } => {
            mail_service_lib::run_send_test(SendTestOptions {
                recipient: to,
                dry_run,
            })
            .await
        }
    };

    // The runner has already reported to the operator
    if let Err(e) = result {
        tracing::debug!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn send_test_recipient_falls_back_to_env() {
        let cli = Cli::command();
        let send_test = cli.find_subcommand("send-test").unwrap();
        let to = send_test
            .get_arguments()
            .find(|arg| arg.get_id() == "to")
            .unwrap();

        assert_eq!(to.get_env(), Some(OsStr::new(TEST_EMAIL_TO_VAR)));
    }
}
