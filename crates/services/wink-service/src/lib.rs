//! Wink Service Library
//!
//! This crate stores winks (a user winking at a post) in PostgreSQL.
//! It can be run as a standalone binary or embedded in the combined binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::WinkResponse;

use crate::config::WinkServiceConfig;
use crate::infra::Database;
use crate::repository::WinkStore;
use crate::service::{WinkManager, WinkService};

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> AppResult<()> {
    let config = WinkServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wink command type.
#[derive(Debug, Clone)]
pub enum WinkAction {
    /// Record a new wink
    Create {
        post_id: String,
        user_id: String,
        created_at: Option<DateTime<Utc>>,
    },
    /// Show a single wink
    Show { id: Uuid },
    /// List winks on a post
    List { post_id: String },
}

/// Run a wink command against the configured database.
pub async fn run_wink_command(action: WinkAction) -> AppResult<()> {
    let config = WinkServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

    let repo = Arc::new(WinkStore::new(db.into_connection()));
    let service = WinkManager::new(repo);

    match action {
        WinkAction::Create {
            post_id,
            user_id,
            created_at,
        } => {
            let wink = service.create_wink(&post_id, &user_id, created_at).await?;
            print_json(&WinkResponse::from(wink))?;
        }
        WinkAction::Show { id } => {
            let wink = service.get_wink(id).await?;
            print_json(&WinkResponse::from(wink))?;
        }
        WinkAction::List { post_id } => {
            let winks = service.list_post_winks(&post_id).await?;
            let responses: Vec<WinkResponse> = winks.iter().map(WinkResponse::from).collect();
            print_json(&responses)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
