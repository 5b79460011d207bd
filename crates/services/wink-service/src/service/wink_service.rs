//! Wink service - Handles wink-related business logic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{parse_reference, NewWink, Wink};

use crate::repository::WinkRepository;

/// Wink service trait for dependency injection.
#[async_trait]
pub trait WinkService: Send + Sync {
    /// Record that a user winked at a post.
    ///
    /// References arrive as raw strings; malformed ones are rejected with a
    /// validation error before anything is stored. `created_at` defaults to
    /// the creation instant.
    async fn create_wink(
        &self,
        post_id: &str,
        user_id: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> AppResult<Wink>;

    /// Get wink by ID
    async fn get_wink(&self, id: Uuid) -> AppResult<Wink>;

    /// List winks on a post, oldest first
    async fn list_post_winks(&self, post_id: &str) -> AppResult<Vec<Wink>>;
}

/// Concrete implementation of WinkService using repository.
pub struct WinkManager {
    repo: Arc<dyn WinkRepository>,
}

impl WinkManager {
    /// Create new wink service instance with repository
    pub fn new(repo: Arc<dyn WinkRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl WinkService for WinkManager {
    async fn create_wink(
        &self,
        post_id: &str,
        user_id: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> AppResult<Wink> {
        let mut new = NewWink::parse(post_id, user_id)?;
        if let Some(ts) = created_at {
            new = new.at(ts);
        }

        let wink = self.repo.create(new).await?;
        tracing::info!(
            wink_id = %wink.id,
            post_id = %wink.post_id,
            user_id = %wink.user_id,
            "Wink recorded"
        );

        Ok(wink)
    }

    async fn get_wink(&self, id: Uuid) -> AppResult<Wink> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_post_winks(&self, post_id: &str) -> AppResult<Vec<Wink>> {
        let post_id = parse_reference("post_id", post_id)?;

        self.repo.list_by_post(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockWinkRepository;

    fn stored(new: NewWink) -> Wink {
        Wink::create(Uuid::new_v4(), new, Utc::now())
    }

    #[tokio::test]
    async fn test_create_wink_defaults_timestamp() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut repo = MockWinkRepository::new();
        repo.expect_create()
            .with(eq(NewWink::new(post_id, user_id)))
            .times(1)
            .returning(|new| Ok(stored(new)));

        let service = WinkManager::new(Arc::new(repo));
        let before = Utc::now();
        let wink = service
            .create_wink(&post_id.to_string(), &user_id.to_string(), None)
            .await
            .unwrap();

        assert_eq!(wink.post_id, post_id);
        assert_eq!(wink.user_id, user_id);
        assert!(wink.created_at >= before);
        assert!(wink.created_at - before < Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_create_wink_keeps_explicit_timestamp() {
        let explicit = Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 0).unwrap();

        let mut repo = MockWinkRepository::new();
        repo.expect_create().returning(|new| Ok(stored(new)));

        let service = WinkManager::new(Arc::new(repo));
        let wink = service
            .create_wink(
                &Uuid::new_v4().to_string(),
                &Uuid::new_v4().to_string(),
                Some(explicit),
            )
            .await
            .unwrap();

        assert_eq!(wink.created_at, explicit);
    }

    #[tokio::test]
    async fn test_create_wink_malformed_reference() {
        let mut repo = MockWinkRepository::new();
        repo.expect_create().times(0);

        let service = WinkManager::new(Arc::new(repo));
        let result = service
            .create_wink("post-42", &Uuid::new_v4().to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_wink_allows_duplicates() {
        let post_id = Uuid::new_v4().to_string();
        let user_id = Uuid::new_v4().to_string();

        let mut repo = MockWinkRepository::new();
        repo.expect_create()
            .times(2)
            .returning(|new| Ok(stored(new)));

        let service = WinkManager::new(Arc::new(repo));
        let first = service.create_wink(&post_id, &user_id, None).await.unwrap();
        let second = service.create_wink(&post_id, &user_id, None).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_wink_not_found() {
        let mut repo = MockWinkRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = WinkManager::new(Arc::new(repo));
        let result = service.get_wink(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_wink_success() {
        let wink = stored(NewWink::new(Uuid::new_v4(), Uuid::new_v4()));
        let id = wink.id;

        let mut repo = MockWinkRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(wink.clone())));

        let service = WinkManager::new(Arc::new(repo));
        let result = service.get_wink(id).await.unwrap();

        assert_eq!(result.id, id);
    }

    #[tokio::test]
    async fn test_list_post_winks() {
        let post_id = Uuid::new_v4();

        let mut repo = MockWinkRepository::new();
        repo.expect_list_by_post()
            .with(eq(post_id))
            .returning(move |post_id| {
                Ok(vec![
                    stored(NewWink::new(post_id, Uuid::new_v4())),
                    stored(NewWink::new(post_id, Uuid::new_v4())),
                ])
            });

        let service = WinkManager::new(Arc::new(repo));
        let winks = service.list_post_winks(&post_id.to_string()).await.unwrap();

        assert_eq!(winks.len(), 2);
    }

    #[tokio::test]
    async fn test_list_post_winks_malformed_post() {
        let mut repo = MockWinkRepository::new();
        repo.expect_list_by_post().times(0);

        let service = WinkManager::new(Arc::new(repo));
        let result = service.list_post_winks("nope").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
