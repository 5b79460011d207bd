//! Wink domain entity and related types.
//!
//! A wink records that a user winked at a post at some instant. Winks are
//! created once and never mutated. No uniqueness is enforced on the
//! `(post_id, user_id)` pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Wink domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wink {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Wink {
    /// Build a wink from creation input.
    ///
    /// `created_at` falls back to `now` when the input carries no timestamp.
    pub fn create(id: Uuid, new: NewWink, now: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id: new.post_id,
            user_id: new.user_id,
            created_at: new.created_at.unwrap_or(now),
        }
    }
}

/// Wink creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewWink {
    /// Post being winked at
    pub post_id: Uuid,
    /// User doing the winking
    pub user_id: Uuid,
    /// Explicit creation time (defaults to the creation instant)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewWink {
    /// Create a new wink input without a timestamp
    pub fn new(post_id: Uuid, user_id: Uuid) -> Self {
        Self {
            post_id,
            user_id,
            created_at: None,
        }
    }

    /// Parse references given as strings.
    pub fn parse(post_id: &str, user_id: &str) -> DomainResult<Self> {
        Ok(Self::new(
            parse_reference("post_id", post_id)?,
            parse_reference("user_id", user_id)?,
        ))
    }

    /// Set an explicit creation timestamp
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Parse an entity reference, naming `field` in the error.
pub fn parse_reference(field: &'static str, raw: &str) -> DomainResult<Uuid> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::MissingReference { field });
    }

    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidReference {
        field,
        value: raw.to_string(),
    })
}

/// Wink response (safe to print or serialize)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinkResponse {
    /// Unique wink identifier
    pub id: Uuid,
    /// Post identifier
    pub post_id: Uuid,
    /// User identifier
    pub user_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Wink> for WinkResponse {
    fn from(wink: Wink) -> Self {
        Self {
            id: wink.id,
            post_id: wink.post_id,
            user_id: wink.user_id,
            created_at: wink.created_at,
        }
    }
}

impl From<&Wink> for WinkResponse {
    fn from(wink: &Wink) -> Self {
        Self::from(wink.clone())
    }
}
